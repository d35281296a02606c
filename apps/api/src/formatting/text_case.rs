//! Casing rules shared by the resume and cover-letter formatters.

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
/// Any non-letter starts a new word: `"o'neil"` → `"O'Neil"`, `"3rd"` → `"3Rd"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Upper-cases the first character and lower-cases everything after it.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Splits comma-separated skills, trimming and capitalizing each item.
///
/// Empty segments are kept, so `""` yields a single empty skill.
pub fn split_skills(skills: &str) -> Vec<String> {
    skills.split(',').map(|s| capitalize(s.trim())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("data analyst"), "Data Analyst");
        assert_eq!(title_case("ACME corp"), "Acme Corp");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("front-end dev"), "Front-End Dev");
    }

    #[test]
    fn test_title_case_digit_starts_new_word() {
        assert_eq!(title_case("3rd shift"), "3Rd Shift");
    }

    #[test]
    fn test_capitalize_lowers_the_tail() {
        assert_eq!(capitalize("python"), "Python");
        assert_eq!(capitalize("Python"), "Python");
        assert_eq!(capitalize("SQL"), "Sql");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("3 years at X"), "3 years at x");
    }

    #[test]
    fn test_split_skills_trims_and_capitalizes() {
        assert_eq!(
            split_skills("python,  SQL , rust"),
            vec!["Python", "Sql", "Rust"]
        );
    }

    #[test]
    fn test_split_skills_empty_input_yields_one_empty_item() {
        assert_eq!(split_skills(""), vec![String::new()]);
    }
}
