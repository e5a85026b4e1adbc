//! Field selection over an already received response. Nothing here talks to the server.
use bank::payloads::BfhlResponse;
use clap::ValueEnum;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    #[value(name = "alphabets")]
    Alphabets,

    #[value(name = "numbers")]
    Numbers,

    #[value(name = "highest_alphabet")]
    HighestAlphabet,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Alphabets, Field::Numbers, Field::HighestAlphabet];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Alphabets => "Alphabets",
            Field::Numbers => "Numbers",
            Field::HighestAlphabet => "Highest Alphabet",
        }
    }

    fn values<'a>(&self, response: &'a BfhlResponse) -> &'a [String] {
        let classification = &response.classification;

        match self {
            Field::Alphabets => &classification.alphabets,
            Field::Numbers => &classification.numbers,
            Field::HighestAlphabet => &classification.highest_alphabet,
        }
    }
}

/// One line per selected field, always in `Field::ALL` order.
pub fn filter_response(response: &BfhlResponse, selected: &[Field]) -> Vec<String> {
    Field::ALL
        .iter()
        .filter(|field| selected.contains(field))
        .map(|field| format!("{}: {}", field.label(), field.values(response).join(", ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use bank::payloads::Classification;

    use super::*;

    fn response() -> BfhlResponse {
        BfhlResponse {
            is_success: true,
            user_id: "john_doe_09052000".to_string(),
            email: "john@xyz.com".to_string(),
            roll_number: "ABCD123".to_string(),
            classification: Classification {
                numbers: vec!["1".to_string(), "334".to_string()],
                alphabets: vec!["A".to_string(), "C".to_string(), "z".to_string()],
                highest_alphabet: vec!["z".to_string()],
            },
        }
    }

    #[test]
    fn test_nothing_selected() {
        assert!(filter_response(&response(), &[]).is_empty());
    }

    #[test]
    fn test_single_field() {
        assert_eq!(
            filter_response(&response(), &[Field::Alphabets]),
            vec!["Alphabets: A, C, z"]
        );
    }

    #[test]
    fn test_fixed_order() {
        assert_eq!(
            filter_response(&response(), &[Field::HighestAlphabet, Field::Numbers]),
            vec!["Numbers: 1, 334", "Highest Alphabet: z"]
        );
    }

    #[test]
    fn test_empty_field_still_shown() {
        let mut response = response();
        response.classification.numbers.clear();

        assert_eq!(filter_response(&response, &[Field::Numbers]), vec!["Numbers: "]);
    }

    #[test]
    fn test_duplicates_ignored() {
        assert_eq!(
            filter_response(&response(), &[Field::Numbers, Field::Numbers]).len(),
            1
        );
    }
}
