use crate::compare::Response;
use crate::ir::{CommonWords, Report, Verdict, Warning, WarningKind, WordLookup};
use crate::jaccard::Similarity;

pub const EXPLANATION: &str = "\
Plagiarism is estimated from the overlap of unique words:

  intersection = unique words found in both essays
  union        = all unique words from both essays combined

  plagiarism% = (intersection / union) * 100

Words are lowercased and ASCII punctuation is removed before comparing.
If the result reaches the threshold (50% by default), the essays are
considered likely plagiarized.";

pub fn warning(kind: WarningKind, message: impl Into<String>) -> Warning {
    Warning {
        kind,
        message: message.into(),
    }
}

pub fn render_common_words(common: &CommonWords) -> String {
    match common {
        CommonWords::NoneFound => "No common words found.".to_string(),
        CommonWords::Found(words) => {
            let mut output = String::from("Common words:\n");
            for entry in words {
                output.push_str(&format!(
                    "  {} -> Essay 1: {}, Essay 2: {}\n",
                    entry.word, entry.count_a, entry.count_b
                ));
            }
            output.trim_end().to_string()
        }
    }
}

pub fn render_lookup(lookup: &WordLookup) -> String {
    if lookup.found {
        format!(
            "'{}' found: Essay 1 -> {} time(s), Essay 2 -> {} time(s)",
            lookup.word, lookup.count_a, lookup.count_b
        )
    } else {
        format!("'{}' not found in either essay.", lookup.word)
    }
}

pub fn render_similarity(similarity: &Similarity, verdict: Verdict) -> String {
    let mut output = format!(
        "Plagiarism percentage: {:.2}% ({} shared of {} unique words)\n",
        similarity.percentage, similarity.intersection_size, similarity.union_size
    );
    output.push_str(match verdict {
        Verdict::LikelyPlagiarism => "There is a high chance of plagiarism.",
        Verdict::NoPlagiarism => "No plagiarism detected.",
    });
    output
}

pub fn render_response(response: &Response) -> String {
    match response {
        Response::CommonWords(common) => render_common_words(common),
        Response::Search(lookup) => render_lookup(lookup),
        Response::Similarity(similarity) => format!(
            "Plagiarism percentage: {:.2}%",
            similarity.percentage
        ),
    }
}

pub fn render_warnings(warnings: &[Warning]) -> String {
    let mut output = String::new();
    for warning in warnings {
        output.push_str(&format!(
            "warning: [{}] {}\n",
            format_kind(&warning.kind),
            warning.message
        ));
    }
    output.trim_end().to_string()
}

pub fn summarize(report: &Report) -> String {
    let mut output = String::new();
    for (index, essay) in report.essays.iter().enumerate() {
        output.push_str(&format!(
            "Essay {}: {} ({} words, {} unique)\n",
            index + 1,
            essay.path.display(),
            essay.tokens,
            essay.vocabulary
        ));
    }
    output.push('\n');
    output.push_str(&render_common_words(&report.common_words));
    output.push_str("\n\n");
    if let Some(lookup) = report.lookup.as_ref() {
        output.push_str(&render_lookup(lookup));
        output.push_str("\n\n");
    }
    output.push_str(&render_similarity(&report.similarity, report.verdict));
    output.push_str(&format!("\nThreshold: {:.2}%\n", report.threshold));
    output.push_str(&format!("Warnings: {}\n", report.warnings.len()));
    if !report.warnings.is_empty() {
        output.push_str(&render_warnings(&report.warnings));
    }
    output.trim_end().to_string()
}

fn format_kind(kind: &WarningKind) -> &'static str {
    match kind {
        WarningKind::MissingInput => "missing_input",
        WarningKind::EmptyDocument => "empty_document",
        WarningKind::InvalidUtf8 => "invalid_utf8",
    }
}
