// Word lists the generator draws from.

pub const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Emily", "Robert", "Lisa", "James", "Maria",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];

pub const EMAIL_DOMAINS: &[&str] = &["university.edu", "institute.org", "research.gov"];

pub const AUTH_PROVIDERS: &[&str] = &["email", "google"];

pub const RESEARCH_FIELDS: &[&str] = &[
    "Computer Science",
    "Biology",
    "Chemistry",
    "Physics",
    "Mathematics",
    "Psychology",
    "Medicine",
    "Engineering",
    "Environmental Science",
    "Economics",
];

pub const INSTITUTIONS: &[&str] = &[
    "Stanford University",
    "MIT",
    "Harvard University",
    "UC Berkeley",
    "Oxford University",
    "Cambridge University",
    "ETH Zurich",
    "Tokyo University",
    "Max Planck Institute",
    "CERN",
    "NIH",
    "NASA Goddard",
];

pub const RESEARCH_INTERESTS: &[&str] = &[
    "Machine Learning",
    "Artificial Intelligence",
    "Quantum Computing",
    "Genomics",
    "Climate Change",
    "Neuroscience",
    "Robotics",
    "Biotechnology",
    "Nanotechnology",
    "Data Science",
    "Cybersecurity",
    "Renewable Energy",
    "Space Exploration",
    "Drug Discovery",
    "Materials Science",
    "Computational Biology",
];

pub const METHODOLOGIES: &[&str] = &[
    "Experimental Design",
    "Statistical Analysis",
    "Computational Modeling",
    "Machine Learning",
    "Qualitative Research",
    "Quantitative Analysis",
    "Literature Review",
    "Case Studies",
    "Surveys",
    "Interviews",
    "Laboratory Experiments",
    "Field Studies",
    "Meta-Analysis",
];

pub const ACADEMIC_TITLES: &[&str] = &[
    "Professor",
    "Associate Professor",
    "Assistant Professor",
    "Research Scientist",
    "Postdoctoral Researcher",
    "Graduate Student",
    "Research Fellow",
    "Principal Investigator",
];

pub const LOCATIONS: &[&str] = &[
    "Boston, MA",
    "San Francisco, CA",
    "New York, NY",
    "London, UK",
    "Berlin, Germany",
    "Tokyo, Japan",
];

/// Placeholders: field, topic, method, application, phenomenon, domain,
/// problem, technology, concept, process, technique, outcome.
pub const PROJECT_TITLES: &[&str] = &[
    "Novel Approaches to {field} Research",
    "Investigating {topic} in {field}",
    "Advanced {method} for {application}",
    "Computational Analysis of {phenomenon}",
    "Machine Learning Applications in {domain}",
    "Sustainable Solutions for {problem}",
    "Next-Generation {technology} Development",
    "Interdisciplinary Study of {concept}",
    "Optimization of {process} Using {technique}",
    "Predictive Modeling for {outcome}",
];

pub const PROJECT_STATUSES: &[&str] = &["planning", "active", "completed", "on_hold"];

pub const NOTE_TITLES: &[&str] = &[
    "Initial Research Findings",
    "Literature Review Summary",
    "Methodology Notes",
    "Experimental Results",
    "Meeting Notes - {date}",
    "Research Ideas and Hypotheses",
    "Data Analysis Observations",
    "Conference Notes",
    "Collaboration Discussion",
    "Future Research Directions",
];

pub const NOTE_CONTENTS: &[&str] = &[
    "Today's research session revealed interesting patterns in the data. The correlation between variables A and B is stronger than initially hypothesized. Need to investigate further with additional samples.",
    "Literature review findings: Recent studies by Smith et al. (2023) and Johnson (2022) support our hypothesis. However, there's a gap in the research regarding long-term effects.",
    "Experimental setup completed successfully. Initial results show promising trends. Statistical significance achieved with p < 0.05. Planning to expand sample size for validation.",
    "Meeting with collaborators was productive. Discussed methodology improvements and timeline adjustments. Action items: 1) Revise protocol, 2) Collect additional data, 3) Schedule follow-up.",
    "New research idea: What if we applied machine learning techniques to this problem? Could potentially improve accuracy by 20-30%. Worth exploring in next phase.",
];

pub const NOTE_TYPES: &[&str] = &["research", "personal", "meeting", "idea"];

pub const CITATION_TYPES: &[&str] = &["article", "book", "website", "conference", "thesis", "report"];

pub const JOURNALS: &[&str] = &[
    "Nature",
    "Science",
    "Cell",
    "The Lancet",
    "PNAS",
    "Nature Biotechnology",
    "IEEE Transactions",
    "ACM Computing Surveys",
    "Journal of Machine Learning Research",
    "Physical Review Letters",
    "Chemical Reviews",
    "Psychological Science",
];

pub const AUTHOR_NAMES: &[&str] = &[
    "Smith, J.",
    "Johnson, A.",
    "Williams, M.",
    "Brown, S.",
    "Jones, R.",
    "Garcia, L.",
    "Miller, K.",
    "Davis, P.",
    "Rodriguez, C.",
    "Martinez, E.",
    "Anderson, T.",
    "Taylor, N.",
    "Thomas, D.",
    "Jackson, B.",
    "White, H.",
];

/// Placeholders: method, field, problem, technique, factor, outcome, domain,
/// phenomenon, application, solution, challenge, area, process, approach, target.
pub const CITATION_TITLES: &[&str] = &[
    "Advanced {method} in {field}: A Comprehensive Study",
    "Novel Approaches to {problem} Using {technique}",
    "The Impact of {factor} on {outcome} in {domain}",
    "Computational Analysis of {phenomenon} in {field}",
    "Machine Learning Applications for {application}",
    "Sustainable {solution} for {challenge} in {area}",
    "Optimization of {process} Through {approach}",
    "Predictive Modeling of {target} Using {method}",
];

pub const DOI_PUBLISHERS: &[&str] = &["nature", "science", "cell"];

pub const EVENT_TYPES: &[&str] = &["milestone", "deadline", "meeting", "presentation"];

pub const PRIORITIES: &[&str] = &["low", "medium", "high"];
