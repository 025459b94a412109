use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a message.
///
/// Four tones change the pulse and the narration pitch. Any other string is
/// accepted and written back verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    #[default]
    Purpose,
    Mystical,
    Scientific,
    Contemplative,
    Other(String),
}

impl Tone {
    /// Tones offered by the composer, in cycling order
    pub const KNOWN: [Tone; 4] = [
        Tone::Purpose,
        Tone::Mystical,
        Tone::Scientific,
        Tone::Contemplative,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Tone::Purpose => "purpose",
            Tone::Mystical => "mystical",
            Tone::Scientific => "scientific",
            Tone::Contemplative => "contemplative",
            Tone::Other(s) => s,
        }
    }

    /// Extra pulse intensity added on top of the length component
    pub fn pulse_bonus(&self) -> f64 {
        match self {
            Tone::Mystical => 0.5,
            Tone::Scientific => 0.25,
            Tone::Contemplative => 0.35,
            _ => 0.3,
        }
    }

    /// Narration pitch multiplier
    pub fn pitch(&self) -> f32 {
        match self {
            Tone::Mystical => 1.1,
            Tone::Scientific => 0.9,
            _ => 1.0,
        }
    }

    /// Next tone in the composer cycle. Custom tones restart the cycle.
    pub fn next(&self) -> Tone {
        match self {
            Tone::Purpose => Tone::Mystical,
            Tone::Mystical => Tone::Scientific,
            Tone::Scientific => Tone::Contemplative,
            Tone::Contemplative | Tone::Other(_) => Tone::Purpose,
        }
    }

    pub fn prev(&self) -> Tone {
        match self {
            Tone::Purpose | Tone::Other(_) => Tone::Contemplative,
            Tone::Mystical => Tone::Purpose,
            Tone::Scientific => Tone::Mystical,
            Tone::Contemplative => Tone::Scientific,
        }
    }
}

impl From<String> for Tone {
    fn from(value: String) -> Self {
        match value.as_str() {
            "purpose" => Tone::Purpose,
            "mystical" => Tone::Mystical,
            "scientific" => Tone::Scientific,
            "contemplative" => Tone::Contemplative,
            _ => Tone::Other(value),
        }
    }
}

impl From<&str> for Tone {
    fn from(value: &str) -> Self {
        Tone::from(value.to_string())
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tones_parse() {
        assert_eq!(Tone::from("mystical"), Tone::Mystical);
        assert_eq!(Tone::from("contemplative"), Tone::Contemplative);
        assert_eq!(Tone::default(), Tone::Purpose);
    }

    #[test]
    fn test_custom_tone_is_preserved() {
        let tone = Tone::from("melancholic");
        assert_eq!(tone, Tone::Other("melancholic".to_string()));
        assert_eq!(serde_json::to_string(&tone).unwrap(), "\"melancholic\"");
        assert_eq!(tone.pulse_bonus(), 0.3);
        assert_eq!(tone.pitch(), 1.0);
    }

    #[test]
    fn test_tone_cycle_wraps() {
        let mut tone = Tone::Purpose;
        for _ in 0..Tone::KNOWN.len() {
            tone = tone.next();
        }
        assert_eq!(tone, Tone::Purpose);
        assert_eq!(Tone::from("custom").next(), Tone::Purpose);
        assert_eq!(Tone::Purpose.next().prev(), Tone::Purpose);
        assert_eq!(Tone::Purpose.prev(), Tone::Contemplative);
    }
}
