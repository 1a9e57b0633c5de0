// File: ./src/model/marker.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// One checklist status, identified by the single character carried inside
/// the line's brackets (`- [x] ...`). The token mapping is bijective and
/// case-sensitive: `[S]` is savings, `[s]` is nothing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Todo,
    Incomplete,
    Done,
    Canceled,
    Forwarded,
    Scheduling,
    Question,
    Important,
    Star,
    Quote,
    Location,
    Bookmark,
    Information,
    Savings,
    Idea,
    Pros,
    Cons,
    Fire,
    Key,
    Win,
    Up,
    Down,
}

impl Marker {
    /// Looks up the marker for a bracket token. Unknown tokens yield `None`,
    /// which disqualifies the line rather than raising an error.
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            ' ' => Some(Self::Todo),
            '/' => Some(Self::Incomplete),
            'x' => Some(Self::Done),
            '-' => Some(Self::Canceled),
            '>' => Some(Self::Forwarded),
            '<' => Some(Self::Scheduling),
            '?' => Some(Self::Question),
            '!' => Some(Self::Important),
            '*' => Some(Self::Star),
            '"' => Some(Self::Quote),
            'l' => Some(Self::Location),
            'b' => Some(Self::Bookmark),
            'i' => Some(Self::Information),
            'S' => Some(Self::Savings),
            'I' => Some(Self::Idea),
            'p' => Some(Self::Pros),
            'c' => Some(Self::Cons),
            'f' => Some(Self::Fire),
            'k' => Some(Self::Key),
            'w' => Some(Self::Win),
            'u' => Some(Self::Up),
            'd' => Some(Self::Down),
            _ => None,
        }
    }

    pub fn token(&self) -> char {
        match self {
            Self::Todo => ' ',
            Self::Incomplete => '/',
            Self::Done => 'x',
            Self::Canceled => '-',
            Self::Forwarded => '>',
            Self::Scheduling => '<',
            Self::Question => '?',
            Self::Important => '!',
            Self::Star => '*',
            Self::Quote => '"',
            Self::Location => 'l',
            Self::Bookmark => 'b',
            Self::Information => 'i',
            Self::Savings => 'S',
            Self::Idea => 'I',
            Self::Pros => 'p',
            Self::Cons => 'c',
            Self::Fire => 'f',
            Self::Key => 'k',
            Self::Win => 'w',
            Self::Up => 'u',
            Self::Down => 'd',
        }
    }

    /// True only for the completed kind. The legacy `checked` flag on
    /// extracted items is derived from this.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Todo => "todo",
            Self::Incomplete => "incomplete",
            Self::Done => "done",
            Self::Canceled => "canceled",
            Self::Forwarded => "forwarded",
            Self::Scheduling => "scheduling",
            Self::Question => "question",
            Self::Important => "important",
            Self::Star => "star",
            Self::Quote => "quote",
            Self::Location => "location",
            Self::Bookmark => "bookmark",
            Self::Information => "information",
            Self::Savings => "savings",
            Self::Idea => "idea",
            Self::Pros => "pros",
            Self::Cons => "cons",
            Self::Fire => "fire",
            Self::Key => "key",
            Self::Win => "win",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{}", name)
    }
}
