use crate::sentiment::{AnalysisMode, Language};

/// Fixed captions of the analyzer window in one language.
///
/// Status-bar messages stay English; they double as log lines.
pub(crate) struct UiStrings {
    pub title: &'static str,
    pub mode_lines: &'static str,
    pub mode_text: &'static str,
    pub language: &'static str,
    pub analyze: &'static str,
    pub analyzing: &'static str,
    pub choose_file: &'static str,
    pub choose_file_hint: &'static str,
    pub no_file: &'static str,
    pub text_hint: &'static str,
    pub lines_note: &'static str,
    pub text_note: &'static str,
    pub column_line: &'static str,
    pub column_sentiment: &'static str,
    pub column_confidence: &'static str,
    pub no_results: &'static str,
    pub open_logs: &'static str,
}

const EN: UiStrings = UiStrings {
    title: "Sentiment analyzer",
    mode_lines: "File, line by line",
    mode_text: "Free text",
    language: "Labels",
    analyze: "Analyze",
    analyzing: "Analyzing…",
    choose_file: "Choose file…",
    choose_file_hint: ".txt, .doc or .docx; you can also drop a file here",
    no_file: "No file selected",
    text_hint: "Paste or type text to analyze",
    lines_note: "Each non-empty line is analyzed separately.",
    text_note: "The whole text is analyzed as one.",
    column_line: "Line",
    column_sentiment: "Sentiment",
    column_confidence: "Confidence",
    no_results: "The service returned no results",
    open_logs: "Open logs",
};

const RU: UiStrings = UiStrings {
    title: "Анализатор тональности",
    mode_lines: "Файл, построчно",
    mode_text: "Свободный текст",
    language: "Язык",
    analyze: "Анализировать",
    analyzing: "Анализ…",
    choose_file: "Выбрать файл…",
    choose_file_hint: ".txt, .doc или .docx; файл можно перетащить в окно",
    no_file: "Файл не выбран",
    text_hint: "Вставьте или введите текст для анализа",
    lines_note: "Каждая непустая строка анализируется отдельно.",
    text_note: "Весь текст анализируется целиком.",
    column_line: "Строка",
    column_sentiment: "Тональность",
    column_confidence: "Уверенность",
    no_results: "Сервис не вернул результатов",
    open_logs: "Открыть логи",
};

pub(crate) fn strings(language: Language) -> &'static UiStrings {
    match language {
        Language::En => &EN,
        Language::Ru => &RU,
    }
}

impl UiStrings {
    pub fn mode(&self, mode: AnalysisMode) -> &'static str {
        match mode {
            AnalysisMode::Lines => self.mode_lines,
            AnalysisMode::Text => self.mode_text,
        }
    }

    pub fn mode_note(&self, mode: AnalysisMode) -> &'static str {
        match mode {
            AnalysisMode::Lines => self.lines_note,
            AnalysisMode::Text => self.text_note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(set: &UiStrings) -> [&'static str; 17] {
        [
            set.title,
            set.mode_lines,
            set.mode_text,
            set.language,
            set.analyze,
            set.analyzing,
            set.choose_file,
            set.choose_file_hint,
            set.no_file,
            set.text_hint,
            set.lines_note,
            set.text_note,
            set.column_line,
            set.column_sentiment,
            set.column_confidence,
            set.no_results,
            set.open_logs,
        ]
    }

    #[test]
    fn russian_captions_cover_every_english_one() {
        let en = all(strings(Language::En));
        let ru = all(strings(Language::Ru));
        for (english, russian) in en.iter().zip(ru.iter()) {
            assert!(!russian.trim().is_empty());
            assert_ne!(english, russian, "{english} is not translated");
        }
    }

    #[test]
    fn table_headers_and_trigger_follow_language() {
        let ru = strings(Language::Ru);
        assert_eq!(ru.column_line, "Строка");
        assert_eq!(ru.column_sentiment, "Тональность");
        assert_eq!(ru.column_confidence, "Уверенность");
        assert_eq!(ru.analyze, "Анализировать");
        assert_eq!(strings(Language::En).mode(AnalysisMode::Text), "Free text");
    }
}
