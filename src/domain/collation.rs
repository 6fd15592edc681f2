//! Name collation used for alphabetical ordering.
//!
//! Country names from the service contain accented Latin letters
//! (`Åland Islands`, `Côte d'Ivoire`, `São Tomé and Príncipe`). A plain byte
//! comparison would push those after `Zimbabwe`. [`fold`] produces a sort key
//! that lowercases and strips diacritics so they sort where a reader expects.

use std::cmp::Ordering;

/// Maps a single character to its folded form, or `None` to drop it.
fn fold_char(c: char) -> Option<char> {
    let folded = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'Ā' | 'ā' => 'a',
        'Ç' | 'ç' | 'Č' | 'č' | 'Ć' | 'ć' => 'c',
        'È' | 'É' | 'Ê' | 'Ë' | 'è' | 'é' | 'ê' | 'ë' | 'Ē' | 'ē' | 'Ě' | 'ě' => 'e',
        'Ì' | 'Í' | 'Î' | 'Ï' | 'ì' | 'í' | 'î' | 'ï' | 'Ī' | 'ī' => 'i',
        'Ñ' | 'ñ' | 'Ń' | 'ń' => 'n',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ō' | 'ō' => 'o',
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'ù' | 'ú' | 'û' | 'ü' | 'Ū' | 'ū' => 'u',
        'Ý' | 'ý' | 'ÿ' => 'y',
        'Š' | 'š' | 'Ś' | 'ś' => 's',
        'Ž' | 'ž' | 'Ź' | 'ź' | 'Ż' | 'ż' => 'z',
        'Ł' | 'ł' => 'l',
        // Punctuation is ignored at the primary level.
        '\'' | '’' | '.' | ',' | '(' | ')' => return None,
        '-' => ' ',
        other => return Some(other.to_lowercase().next().unwrap_or(other)),
    };
    Some(folded)
}

/// Folds a name into its collation key.
///
/// # Examples
///
/// ```
/// use zatlas::domain::collation::fold;
///
/// assert_eq!(fold("Åland Islands"), "aland islands");
/// assert_eq!(fold("Côte d'Ivoire"), "cote divoire");
/// ```
#[must_use]
pub fn fold(name: &str) -> String {
    name.chars().filter_map(fold_char).collect()
}

/// Compares two names by collation key, falling back to the raw strings so
/// the ordering is total.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let mut names = vec!["Zimbabwe", "Åland Islands", "Albania", "Afghanistan"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["Afghanistan", "Åland Islands", "Albania", "Zimbabwe"]);
    }

    #[test]
    fn test_case_does_not_affect_primary_order() {
        assert_eq!(compare_names("france", "Germany"), Ordering::Less);
        assert_eq!(compare_names("Germany", "france"), Ordering::Greater);
    }

    #[test]
    fn test_equal_keys_tie_break_on_raw_string() {
        assert_ne!(compare_names("Curacao", "Curaçao"), Ordering::Equal);
        assert_eq!(compare_names("Peru", "Peru"), Ordering::Equal);
    }

    #[test]
    fn test_fold_drops_punctuation() {
        assert_eq!(fold("St. Lucia"), "st lucia");
        assert_eq!(fold("Guinea-Bissau"), "guinea bissau");
    }
}
