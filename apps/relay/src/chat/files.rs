//! File-attachment analysis. Works from `{name, type}` metadata only; file
//! bytes never reach the relay.

use serde::{Deserialize, Serialize};

use crate::chat::models::AttachedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    AcademicPaper,
    Notes,
    DataFile,
    Other,
}

impl FileCategory {
    /// Substring match on the lowercased MIME-like type. Tabular types are
    /// checked before `text` so `text/csv` counts as data.
    pub fn classify(mime_type: &str) -> Self {
        let t = mime_type.to_lowercase();
        if t.contains("pdf") {
            FileCategory::AcademicPaper
        } else if t.contains("csv") || t.contains("excel") || t.contains("spreadsheet") {
            FileCategory::DataFile
        } else if t.contains("text") {
            FileCategory::Notes
        } else {
            FileCategory::Other
        }
    }

    fn insights(&self) -> &'static [&'static str] {
        match self {
            FileCategory::AcademicPaper => &[
                "Academic paper detected - extract key findings and methodology",
                "Check the citation list for related work worth reading",
                "Note the limitations section for open research gaps",
            ],
            FileCategory::Notes => &[
                "Research notes detected - identify recurring themes",
                "Convert open questions into research objectives",
            ],
            FileCategory::DataFile => &[
                "Data file detected - review variables and data types",
                "Check for missing values and outliers before analysis",
                "Consider descriptive statistics as a first pass",
            ],
            FileCategory::Other => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInsight {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub category: FileCategory,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub summary: String,
    pub files: Vec<FileInsight>,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
}

const KEY_INSIGHTS: &[&str] = &[
    "Cross-reference findings across the attached files",
    "Look for methodological consistency between sources",
    "Identify gaps the attached material does not cover",
];

const RECOMMENDATIONS: &[&str] = &[
    "Organize the files by research theme",
    "Record citations for every source you rely on",
    "Summarize each file in a research note",
];

/// Builds the analysis for a set of attachments. `None` when nothing is attached.
pub fn analyze_files(files: &[AttachedFile]) -> Option<FileAnalysis> {
    if files.is_empty() {
        return None;
    }

    let files: Vec<FileInsight> = files
        .iter()
        .map(|f| {
            let category = FileCategory::classify(&f.mime_type);
            FileInsight {
                name: f.name.clone(),
                mime_type: f.mime_type.clone(),
                category,
                insights: category.insights().iter().map(|s| s.to_string()).collect(),
            }
        })
        .collect();

    Some(FileAnalysis {
        summary: build_summary(&files),
        files,
        key_insights: KEY_INSIGHTS.iter().map(|s| s.to_string()).collect(),
        recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
    })
}

fn build_summary(files: &[FileInsight]) -> String {
    let count = files.len();
    let mut summary = format!(
        "Analyzed {count} attached file{}.",
        if count == 1 { "" } else { "s" }
    );
    if files
        .iter()
        .any(|f| f.category == FileCategory::AcademicPaper)
    {
        summary.push_str(" Includes PDF documents with research content.");
    }
    if files.iter().any(|f| f.category == FileCategory::DataFile) {
        summary.push_str(" Includes tabular data suitable for statistical analysis.");
    }
    summary
}

impl FileAnalysis {
    /// Text block appended to the user turn so the model knows what was attached.
    pub fn prompt_context(&self) -> String {
        let mut block = String::from("Attached files:\n");
        for file in &self.files {
            block.push_str(&format!("- {} ({})\n", file.name, file.mime_type));
        }
        block.push_str(&self.summary);
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime_type: &str) -> AttachedFile {
        AttachedFile {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
        }
    }

    #[test]
    fn test_no_files_no_analysis() {
        assert!(analyze_files(&[]).is_none());
    }

    #[test]
    fn test_classification_by_type_substring() {
        assert_eq!(
            FileCategory::classify("application/pdf"),
            FileCategory::AcademicPaper
        );
        assert_eq!(FileCategory::classify("text/plain"), FileCategory::Notes);
        assert_eq!(FileCategory::classify("text/csv"), FileCategory::DataFile);
        assert_eq!(
            FileCategory::classify("application/vnd.ms-excel"),
            FileCategory::DataFile
        );
        assert_eq!(
            FileCategory::classify(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            FileCategory::DataFile
        );
        assert_eq!(FileCategory::classify("image/png"), FileCategory::Other);
    }

    #[test]
    fn test_summary_flags_pdf_and_tabular() {
        let analysis = analyze_files(&[
            file("paper.pdf", "application/pdf"),
            file("results.xlsx", "application/vnd.ms-excel"),
        ])
        .unwrap();
        assert!(analysis.summary.starts_with("Analyzed 2 attached files."));
        assert!(analysis.summary.contains("PDF"));
        assert!(analysis.summary.contains("tabular"));
    }

    #[test]
    fn test_browser_csv_upload_flags_tabular_data() {
        let analysis = analyze_files(&[file("survey.csv", "text/csv")]).unwrap();
        assert_eq!(analysis.files[0].category, FileCategory::DataFile);
        assert!(analysis.summary.contains("tabular"));
    }

    #[test]
    fn test_single_file_summary_is_singular() {
        let analysis = analyze_files(&[file("img.png", "image/png")]).unwrap();
        assert_eq!(analysis.summary, "Analyzed 1 attached file.");
        assert!(analysis.files[0].insights.is_empty());
    }

    #[test]
    fn test_fixed_cross_file_sections_always_present() {
        let analysis = analyze_files(&[file("img.png", "image/png")]).unwrap();
        assert_eq!(analysis.key_insights.len(), KEY_INSIGHTS.len());
        assert_eq!(analysis.recommendations.len(), RECOMMENDATIONS.len());
    }

    #[test]
    fn test_per_file_insights_follow_category() {
        let analysis = analyze_files(&[file("notes.txt", "text/plain")]).unwrap();
        assert_eq!(analysis.files[0].category, FileCategory::Notes);
        assert!(analysis.files[0].insights[0].starts_with("Research notes"));
    }

    #[test]
    fn test_prompt_context_lists_files() {
        let analysis = analyze_files(&[file("paper.pdf", "application/pdf")]).unwrap();
        let block = analysis.prompt_context();
        assert!(block.starts_with("Attached files:\n- paper.pdf (application/pdf)\n"));
        assert!(block.ends_with(&analysis.summary));
    }
}
