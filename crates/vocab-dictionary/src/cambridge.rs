use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};
use vocab_core::preprocess::{DefaultPreprocessor, Preprocessor};
use vocab_types::{Definition, DictionaryResult, Entry, GeneralInfo, Region, Sense};

use crate::matcher::{Query, find, find_all, find_prev_sibling, find_text, text};

static ENTRY_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("entry-body__el").expect("valid entry pattern"));
static SENSE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("pr dsense").expect("valid sense pattern"));
static LEVEL_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("epp-xref").expect("valid level pattern"));

const UK_PRONUNCIATION_TITLE: &str = "Listen to the British English pronunciation";

/// Everything read from one dictionary page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub result: DictionaryResult,
    pub translation: String,
    /// Host-relative path of the British pronunciation
    pub audio_path: Option<String>,
}

/// Turns a Cambridge dictionary page into entries.
///
/// Never fails: anything missing from the page becomes an empty value at
/// the smallest level it affects.
pub struct CambridgeParser {
    translation_marker: String,
    preprocessor: DefaultPreprocessor,
}

impl CambridgeParser {
    pub fn new(translation_marker: impl Into<String>) -> Self {
        Self {
            translation_marker: translation_marker.into(),
            preprocessor: DefaultPreprocessor,
        }
    }

    pub fn extract(&self, document: Option<&[u8]>) -> Extraction {
        let Some(bytes) = document.filter(|b| !b.is_empty()) else {
            tracing::warn!("No document to extract from");
            return Extraction::default();
        };

        let html = Html::parse_document(&String::from_utf8_lossy(bytes));
        self.extract_html(&html)
    }

    pub fn extract_html(&self, html: &Html) -> Extraction {
        let main_page = find(
            html.root_element(),
            &Query::tag("article").attr("id", "page-content"),
        );
        let Some(main_page) = main_page else {
            tracing::info!("Main page not found, the word is probably not in the dictionary");
            return Extraction::default();
        };

        let page = find(main_page, &Query::tag("div").class("page"));
        let result = match page {
            Some(page) => self.regions(page),
            None => {
                tracing::warn!("Page container not found");
                DictionaryResult::empty()
            }
        };

        Extraction {
            result,
            translation: self.translation(main_page),
            audio_path: self.pronunciation_path(page.unwrap_or(main_page)),
        }
    }

    fn regions(&self, page: ElementRef) -> DictionaryResult {
        let mut result = DictionaryResult::empty();

        let regions = find_all(page, &Query::tag("div").class("pr dictionary"));
        if regions.is_empty() {
            tracing::info!("Dictionary regions not found");
        }

        for region in regions {
            let subtitle = find(region, &Query::tag("h2").class("c_hh")).map(text);

            let kind = match subtitle.as_deref() {
                None => Region::Uk,
                Some(s) if s.contains("American Dictionary") => Region::Us,
                Some(s) if s.contains("Business English") => Region::Business,
                Some(s) => {
                    tracing::info!("Skipping dictionary region '{}'", s.trim());
                    continue;
                }
            };

            let entries = self.entries(region);
            tracing::debug!("Region {kind}: {} entries", entries.len());
            result.set(kind, entries);
        }

        result
    }

    fn entries(&self, region: ElementRef) -> Vec<Entry> {
        find_all(region, &Query::tag("div").class_matching(&ENTRY_CLASS))
            .into_iter()
            .map(|entry| Entry {
                general_info: self.general_info(entry),
                senses: self.senses(entry),
            })
            .collect()
    }

    fn general_info(&self, entry: ElementRef) -> GeneralInfo {
        let headword = find(entry, &Query::tag("div").class("di-title"))
            .and_then(|title| {
                find(title, &Query::tag("h2"))
                    .or_else(|| find(title, &Query::tag("span").class("hw dhw")))
            })
            .map(text)
            .unwrap_or_default();

        GeneralInfo {
            headword,
            part_of_speech: find_text(entry, &Query::tag("span").class("pos dpos")),
            // per-entry audio is not resolved from the entry block
            uk_audio: String::new(),
            us_audio: String::new(),
            irregular_forms: find_text(entry, &Query::tag("span").class("irreg-infls dinfls")),
        }
    }

    fn senses(&self, entry: ElementRef) -> Vec<Sense> {
        find_all(entry, &Query::tag("div").class_matching(&SENSE_CLASS))
            .into_iter()
            .map(|sense| Sense {
                word_function: find(sense, &Query::tag("h3").class("dsense_h"))
                    .map(|h| self.preprocessor.word_function(&text(h)))
                    .unwrap_or_default(),
                definitions: self.definitions(sense),
            })
            .collect()
    }

    fn definitions(&self, sense: ElementRef) -> Vec<Definition> {
        find_all(sense, &Query::tag("div").class("def-block ddef_block"))
            .into_iter()
            .map(|block| {
                let examples = find_all(block, &Query::tag("span").class("eg deg"))
                    .into_iter()
                    .map(text)
                    .collect();

                Definition::new(
                    find_text(block, &Query::tag("span").class_matching(&LEVEL_CLASS)),
                    find_text(block, &Query::tag("div").class("def ddef_d db")),
                    examples,
                )
            })
            .collect()
    }

    fn pronunciation_path(&self, scope: ElementRef) -> Option<String> {
        let marker = find(scope, &Query::tag("div").attr("title", UK_PRONUNCIATION_TITLE))?;
        let speaker = find_prev_sibling(marker, &Query::tag("audio").attr("id", "audio1"))?;
        let source = find(speaker, &Query::tag("source").attr("type", "audio/mpeg"))?;

        source
            .value()
            .attr("src")
            .map(str::trim)
            .filter(|src| !src.is_empty())
            .map(str::to_string)
    }

    fn translation(&self, main_page: ElementRef) -> String {
        let Some(block) = find(main_page, &Query::tag("div").class("lmb-10")) else {
            return String::new();
        };

        for group in find_all(block, &Query::tag("div").class("pr bw lp-10 lmt-5")) {
            let labelled = find(group, &Query::tag("div").class("tc-bd fs14 lmb-10"))
                .is_some_and(|label| text(label).contains(&self.translation_marker));
            if !labelled {
                continue;
            }

            return find(group, &Query::tag("div").class("tc-bb tb lpb-25 break-cj"))
                .map(|t| self.preprocessor.translation(&text(t)))
                .unwrap_or_default();
        }

        String::new()
    }
}
