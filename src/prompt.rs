//! Edit instructions sent alongside the canvas and mask.

use std::fmt;

/// The image edit endpoint rejects prompts longer than this.
pub const MAX_PROMPT_CHARS: usize = 999;

const ELLIPSIS: &str = "...";

const ARCHITECTURE_PREAMBLE: &str = "Keep the room EXACTLY as is - windows and doors must remain identical in size, style, and position. Do not modify ANY architectural elements (walls, ceiling, floor pattern, moldings). ONLY add furniture and decor. Keep room bright and maintain all lighting conditions. ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    LivingRoom,
    Bedroom,
    Kitchen,
}

impl RoomType {
    /// Maps free-form input onto a known room. Anything unrecognized is a living room.
    pub fn normalize(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "living" | "living room" => Self::LivingRoom,
            "bedroom" => Self::Bedroom,
            "kitchen" => Self::Kitchen,
            _ => Self::LivingRoom,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LivingRoom => "living room",
            Self::Bedroom => "bedroom",
            Self::Kitchen => "kitchen",
        }
    }

    fn furniture(self) -> &'static str {
        match self {
            Self::LivingRoom => {
                "sofa, coffee table, accent chairs, media console, area rug, throw pillows, wall art, side tables, floor lamp"
            }
            Self::Bedroom => {
                "bed with bedding, nightstands, dresser, reading lamp, area rug, curtains, wall art, accent chair, floor mirror"
            }
            Self::Kitchen => {
                "dining table with chairs, bar stools, pendant lights, kitchen island decor, fruit bowl, small appliances, wall shelves, kitchen textiles"
            }
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    ModernMinimalist,
    LuxuryClassic,
    Scandinavian,
    Industrial,
    Bohemian,
    Contemporary,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Self::ModernMinimalist,
        Self::LuxuryClassic,
        Self::Scandinavian,
        Self::Industrial,
        Self::Bohemian,
        Self::Contemporary,
    ];

    /// Case-insensitive lookup; `None` for styles we have no descriptor for.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "modern minimalist" => Some(Self::ModernMinimalist),
            "luxury classic" => Some(Self::LuxuryClassic),
            "scandinavian" => Some(Self::Scandinavian),
            "industrial" => Some(Self::Industrial),
            "bohemian" => Some(Self::Bohemian),
            "contemporary" => Some(Self::Contemporary),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ModernMinimalist => "modern minimalist",
            Self::LuxuryClassic => "luxury classic",
            Self::Scandinavian => "scandinavian",
            Self::Industrial => "industrial",
            Self::Bohemian => "bohemian",
            Self::Contemporary => "contemporary",
        }
    }

    fn descriptor(self, room: RoomType) -> String {
        let furniture = room.furniture();
        match self {
            Self::ModernMinimalist => format!(
                "Carefully add {furniture} in a modern minimalist style. Clean lines, neutral colors, minimal decor, uncluttered spaces."
            ),
            Self::LuxuryClassic => format!(
                "Carefully add {furniture} in a luxury classic style. Rich materials, elegant details, sophisticated color palette."
            ),
            Self::Scandinavian => format!(
                "Carefully add {furniture} in Scandinavian style. Light woods, organic shapes, cozy textures, functional design."
            ),
            Self::Industrial => format!(
                "Carefully add {furniture} in industrial style. Metal accents, raw materials, exposed elements, urban aesthetic."
            ),
            Self::Bohemian => format!(
                "Carefully add {furniture} in bohemian style. Layered textiles, natural materials, eclectic mix, warm colors."
            ),
            Self::Contemporary => format!(
                "Carefully add {furniture} in contemporary style. Current trends, comfortable pieces, balanced design."
            ),
        }
    }
}

/// Builds the edit instruction. An unknown style yields the preamble alone.
pub fn build_prompt(style: &str, room: RoomType) -> String {
    let descriptor = Style::parse(style)
        .map(|style| style.descriptor(room))
        .unwrap_or_default();
    bound_prompt(format!("{ARCHITECTURE_PREAMBLE}{descriptor}"))
}

fn bound_prompt(prompt: String) -> String {
    if prompt.chars().count() <= MAX_PROMPT_CHARS {
        return prompt;
    }
    let keep = MAX_PROMPT_CHARS - ELLIPSIS.len();
    let mut bounded: String = prompt.chars().take(keep).collect();
    bounded.push_str(ELLIPSIS);
    bounded
}
