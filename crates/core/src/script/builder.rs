/// Accumulates shell statements, one per line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptBuilder {
    lines: Vec<String>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shebang(mut self) -> Self {
        self.lines.push("#!/bin/sh".to_string());
        self
    }

    pub fn line(mut self, statement: impl Into<String>) -> Self {
        self.lines.push(statement.into());
        self
    }

    pub fn lines<I, S>(mut self, statements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(statements.into_iter().map(Into::into));
        self
    }

    pub fn comment(self, text: &str) -> Self {
        self.line(format!("# {text}"))
    }

    pub fn blank(self) -> Self {
        self.line(String::new())
    }

    pub fn export(self, name: &str, value: &str) -> Self {
        self.line(format!("export {name}={value}"))
    }

    /// Export `value`, or `default` only when the variable is not already set
    pub fn export_with_default(self, name: &str, value: Option<&str>, default: &str) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => self.export(name, value),
            None => self
                .line(format!("if [ -z \"${name}\" ]; then"))
                .line(format!("    export {name}={default}"))
                .line("fi"),
        }
    }

    /// The script text, newline-terminated
    pub fn build(&self) -> String {
        let mut script = self.lines.join("\n");
        script.push('\n');
        script
    }
}
