use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Turn user input into the path segment of a dictionary URL
    fn search_term(&self, text: &str) -> String {
        let text: String = text.trim().nfkc().collect();

        text.split_whitespace().collect::<Vec<_>>().join("-")
    }

    /// Clean the text of a translation block for a CJK locale
    fn translation(&self, text: &str) -> String {
        text.replace(['\n', '\r'], "")
            .replace(',', "，")
            .replace(' ', "")
    }

    /// Clean the heading of a sense block
    fn word_function(&self, text: &str) -> String {
        text.replace('\n', "").replace("  ", "")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

const INFLECTION_LABELS: [&str; 3] = ["present participle", "past tense", "past participle"];

/// Irregular forms as shown to the user, grammatical labels removed
pub fn strip_inflection_labels(forms: &str) -> String {
    INFLECTION_LABELS
        .iter()
        .fold(forms.to_string(), |acc, label| acc.replace(label, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_term_hyphenates_whitespace() {
        let p = DefaultPreprocessor;
        assert_eq!(p.search_term("  give   up \n"), "give-up");
        assert_eq!(p.search_term("run"), "run");
        assert_eq!(p.search_term("   "), "");
    }

    #[test]
    fn search_term_folds_compatibility_forms() {
        let p = DefaultPreprocessor;
        assert_eq!(p.search_term("ｒｕｎ"), "run");
    }

    #[test]
    fn translation_uses_fullwidth_commas() {
        let p = DefaultPreprocessor;
        assert_eq!(p.translation("\n跑, 奔跑 ,  跑步\n"), "跑，奔跑，跑步");
    }

    #[test]
    fn word_function_drops_layout_whitespace() {
        let p = DefaultPreprocessor;
        assert_eq!(p.word_function("\n    verb (MOVE FAST)\n  "), "verb (MOVE FAST)");
    }

    #[test]
    fn inflection_labels_are_removed() {
        assert_eq!(
            strip_inflection_labels("present participle running | past tense ran | past participle run"),
            " running |  ran |  run"
        );
    }
}
