// Prompt templates for the research analysis and outline endpoints.
// Placeholders are replaced with `str::replace` before sending.

/// Paper analysis. Replace `{content}`.
pub const ANALYZE_PAPER_TEMPLATE: &str = "Analyze this research paper content and provide:
1. Key findings and contributions
2. Methodology assessment
3. Strengths and limitations
4. Relevance to current research
5. Citation recommendations

Content: {content}";

/// Data analysis. Replace `{content}`.
pub const ANALYZE_DATA_TEMPLATE: &str = "Analyze this research data and suggest:
1. Appropriate statistical methods
2. Data visualization strategies
3. Potential issues or biases
4. Analysis workflow
5. Interpretation guidelines

Data description: {content}";

/// Anything else. Replace `{content}`.
pub const ANALYZE_GENERAL_TEMPLATE: &str = "Provide research analysis for: {content}";

/// Outline generation. Replace `{document_type}` and `{topic}`.
pub const OUTLINE_TEMPLATE: &str = "Create a detailed outline for a {document_type} on the topic: {topic}

Include:
1. Hierarchical structure with main sections and subsections
2. Key points to cover in each section
3. Estimated word counts or page lengths
4. Critical literature to include
5. Methodological considerations
6. Timeline for completion

Format as a structured, actionable outline.";

/// Served by `GET /research-topics`.
pub const RESEARCH_TOPICS: &[&str] = &[
    "Literature Review Strategies",
    "Research Methodology Design",
    "Quantitative Data Analysis",
    "Qualitative Research Methods",
    "Academic Writing and Publishing",
    "Citation Management",
    "Grant Proposal Writing",
    "Research Ethics and IRB Approval",
];
