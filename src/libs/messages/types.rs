#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    PromptSelectModules,
    ConfigModuleWatson,
    ConfigModulePlot,
    PromptWatsonCommand,
    PromptDefaultPeriod,
    PromptDefaultSort,
    PromptDefaultTruncate,

    // === TRACKER MESSAGES ===
    WatsonRunning(String),            // full command line
    WatsonFailed(String),             // exit status
    NoEntriesFound,

    // === PIPELINE MESSAGES ===
    EntriesSkipped(usize),            // malformed entry count
    EntrySkipped(String, String),     // project, fault
    EmptyDimension(String),           // dimension title

    // === GRAPH MESSAGES ===
    GraphSection(String),             // dimension title
    GraphSectionRange(String, String, String), // dimension title, from, to
    TotalsHeader,

    // === EXPORT MESSAGES ===
    ExportingData(String, String),    // what, format
    ExportedTo(String),               // path
}
