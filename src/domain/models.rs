use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Section,
    Pass,
    Warn,
    Fail,
    Info,
}

impl Status {
    pub fn glyph(&self) -> &'static str {
        match self {
            Status::Section => "",
            Status::Pass => "✓",
            Status::Warn => "!",
            Status::Fail => "✗",
            Status::Info => "·",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub status: Status,
    pub text: String,
}

/// Accumulator for one audit run. Counters only ever increase; the final
/// exit code depends on `errors` alone.
#[derive(Debug, Default, Serialize)]
pub struct AuditReport {
    pub findings: Vec<Finding>,
    pub errors: u32,
    pub warnings: u32,
}

impl AuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, status: Status, text: impl Into<String>) {
        self.findings.push(Finding {
            status,
            text: text.into(),
        });
    }

    pub fn section(&mut self, title: &str) {
        self.push(Status::Section, title);
    }

    pub fn pass(&mut self, text: impl Into<String>) {
        self.push(Status::Pass, text);
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.warnings += 1;
        self.push(Status::Warn, text);
    }

    pub fn fail(&mut self, text: impl Into<String>) {
        self.errors += 1;
        self.push(Status::Fail, text);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Status::Info, text);
    }

    pub fn verdict(&self) -> String {
        if self.errors > 0 {
            "audit failed".to_string()
        } else if self.warnings > 0 {
            format!("audit passed with {} warning(s)", self.warnings)
        } else {
            "all checks passed".to_string()
        }
    }
}
