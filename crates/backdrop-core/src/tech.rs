use crate::error::BackdropError;
use crate::palette::Color;
use std::str::FromStr;

/// Technologies that get a floating logo badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tech {
    JavaScript,
    Python,
    Cpp,
    React,
}

impl Tech {
    pub const ALL: [Tech; 4] = [Tech::JavaScript, Tech::Python, Tech::Cpp, Tech::React];

    pub fn id(self) -> &'static str {
        match self {
            Tech::JavaScript => "javascript",
            Tech::Python => "python",
            Tech::Cpp => "cpp",
            Tech::React => "react",
        }
    }

    /// Caption drawn under the badge: the identifier with its first letter raised.
    pub fn label(self) -> &'static str {
        match self {
            Tech::JavaScript => "Javascript",
            Tech::Python => "Python",
            Tech::Cpp => "Cpp",
            Tech::React => "React",
        }
    }

    pub fn logo_url(self) -> &'static str {
        match self {
            Tech::JavaScript => {
                "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg"
            }
            Tech::Python => {
                "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg"
            }
            Tech::Cpp => {
                "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/cplusplus/cplusplus-original.svg"
            }
            Tech::React => {
                "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"
            }
        }
    }

    pub fn color(self) -> Color {
        match self {
            Tech::JavaScript => Color::rgba(247, 223, 30, 0.9),
            Tech::Python => Color::rgba(53, 114, 165, 0.9),
            Tech::Cpp => Color::rgba(0, 90, 156, 0.9),
            Tech::React => Color::rgba(97, 218, 251, 0.9),
        }
    }
}

impl FromStr for Tech {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tech::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| BackdropError::UnknownTech(s.to_string()))
    }
}

/// Load progress of a badge's logo image. Only `Ready` badges are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoState {
    #[default]
    Pending,
    Ready,
    Failed,
}
