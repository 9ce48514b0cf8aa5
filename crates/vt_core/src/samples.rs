use std::fmt;
use std::str::FromStr;

use crate::{Article, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Fake,
    Real,
}

impl FromStr for SampleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fake" => Ok(SampleKind::Fake),
            "real" => Ok(SampleKind::Real),
            other => Err(Error::InvalidInput(format!(
                "Unknown sample: {} (expected fake or real)",
                other
            ))),
        }
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleKind::Fake => write!(f, "fake"),
            SampleKind::Real => write!(f, "real"),
        }
    }
}

/// Canned articles for trying out the detector.
pub fn sample(kind: SampleKind) -> Article {
    match kind {
        SampleKind::Fake => Article::new(
            "New UN Mandate Will Automatically Restrict Meat Consumption by 2027",
            "A new environmental framework ratified in Geneva will automatically enforce dietary \
             quotas for member nations starting January 2027. The mandate requires all digital \
             payment processors to track carbon expenditures and completely deny transactions for \
             meat products once an individual's monthly limit is reached. Insiders confirm the \
             technology is already integrated into banking apps.",
        ),
        SampleKind::Real => Article::new(
            "WHO Report Monitors New Viral Strain, Though Transmission Risk Remains Low",
            "The World Health Organization (WHO) issued a preliminary report Tuesday regarding a \
             novel viral strain detected in regional livestock. While researchers noted genetic \
             similarities to previous pathogens, Dr. Elena Rossi stated that current data suggests \
             human-to-human transmission is unlikely at this stage. The agency recommends continued \
             surveillance but advises against travel restrictions.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_kind() {
        assert_eq!("fake".parse::<SampleKind>().unwrap(), SampleKind::Fake);
        assert_eq!(" Real ".parse::<SampleKind>().unwrap(), SampleKind::Real);
        assert!("satire".parse::<SampleKind>().is_err());
    }

    #[test]
    fn test_samples_are_not_blank() {
        for kind in [SampleKind::Fake, SampleKind::Real] {
            let article = sample(kind);
            assert!(!article.is_blank());
            assert!(!article.text.contains("  "));
        }
    }
}
