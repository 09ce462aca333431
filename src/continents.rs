use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Continent {
    #[serde(rename = "South America")]
    SouthAmerica,
    Europe,
    Africa,
    Asia,
    #[serde(rename = "North America")]
    NorthAmerica,
    Oceania,
    Other,
}

impl Continent {
    pub fn label(self) -> &'static str {
        match self {
            Continent::SouthAmerica => "South America",
            Continent::Europe => "Europe",
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::Other => "Other",
        }
    }
}

/// Confederation of the team, keyed by the name it appears under in the match
/// table. Covers superseded national entities (West Germany, Soviet Union,
/// Dutch East Indies, ...) under their historical names.
pub fn continent_for(team: &str) -> Continent {
    TEAM_CONTINENTS
        .get(team)
        .copied()
        .unwrap_or(Continent::Other)
}

static TEAM_CONTINENTS: Lazy<HashMap<&'static str, Continent>> = Lazy::new(|| {
    use Continent::*;

    let entries: &[(&str, Continent)] = &[
        // South America
        ("Brazil", SouthAmerica),
        ("Argentina", SouthAmerica),
        ("Uruguay", SouthAmerica),
        ("Colombia", SouthAmerica),
        ("Chile", SouthAmerica),
        ("Paraguay", SouthAmerica),
        ("Peru", SouthAmerica),
        ("Ecuador", SouthAmerica),
        ("Bolivia", SouthAmerica),
        ("Venezuela", SouthAmerica),
        // Europe
        ("Germany", Europe),
        ("West Germany", Europe),
        ("East Germany", Europe),
        ("France", Europe),
        ("Italy", Europe),
        ("Spain", Europe),
        ("England", Europe),
        ("Netherlands", Europe),
        ("Portugal", Europe),
        ("Belgium", Europe),
        ("Croatia", Europe),
        ("Poland", Europe),
        ("Sweden", Europe),
        ("Switzerland", Europe),
        ("Austria", Europe),
        ("Hungary", Europe),
        ("Czechoslovakia", Europe),
        ("Yugoslavia", Europe),
        ("Soviet Union", Europe),
        ("Russia", Europe),
        ("Ukraine", Europe),
        ("Romania", Europe),
        ("Bulgaria", Europe),
        ("Greece", Europe),
        ("Denmark", Europe),
        ("Norway", Europe),
        ("Ireland", Europe),
        ("Northern Ireland", Europe),
        ("Scotland", Europe),
        ("Wales", Europe),
        ("Turkey", Europe),
        ("Serbia", Europe),
        // Africa
        ("Cameroon", Africa),
        ("Nigeria", Africa),
        ("Senegal", Africa),
        ("Ghana", Africa),
        ("Morocco", Africa),
        ("Algeria", Africa),
        ("Egypt", Africa),
        ("South Africa", Africa),
        ("Tunisia", Africa),
        ("Ivory Coast", Africa),
        ("Zaire", Africa),
        // Asia (Australia plays in the AFC)
        ("South Korea", Asia),
        ("Japan", Asia),
        ("Saudi Arabia", Asia),
        ("Iran", Asia),
        ("China", Asia),
        ("North Korea", Asia),
        ("Australia", Asia),
        ("Qatar", Asia),
        ("Iraq", Asia),
        ("Kuwait", Asia),
        ("United Arab Emirates", Asia),
        ("Indonesia", Asia),
        ("Dutch East Indies", Asia),
        // North/Central America & Caribbean
        ("Mexico", NorthAmerica),
        ("USA", NorthAmerica),
        ("Costa Rica", NorthAmerica),
        ("Honduras", NorthAmerica),
        ("Jamaica", NorthAmerica),
        ("Canada", NorthAmerica),
        ("Cuba", NorthAmerica),
        ("El Salvador", NorthAmerica),
        ("Haiti", NorthAmerica),
        ("Trinidad and Tobago", NorthAmerica),
        ("Panama", NorthAmerica),
        // Oceania
        ("New Zealand", Oceania),
    ];
    entries.iter().copied().collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_current_and_historical_names() {
        assert_eq!(continent_for("Brazil"), Continent::SouthAmerica);
        assert_eq!(continent_for("West Germany"), Continent::Europe);
        assert_eq!(continent_for("Soviet Union"), Continent::Europe);
        assert_eq!(continent_for("Dutch East Indies"), Continent::Asia);
        assert_eq!(continent_for("Australia"), Continent::Asia);
        assert_eq!(continent_for("Trinidad and Tobago"), Continent::NorthAmerica);
        assert_eq!(continent_for("New Zealand"), Continent::Oceania);
    }

    #[test]
    fn unknown_team_maps_to_other() {
        assert_eq!(continent_for("Atlantis"), Continent::Other);
        assert_eq!(continent_for(""), Continent::Other);
    }

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&Continent::SouthAmerica).expect("serialize");
        assert_eq!(json, r#""South America""#);
        assert_eq!(Continent::SouthAmerica.label(), "South America");
    }
}
