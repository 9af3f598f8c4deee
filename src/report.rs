use std::fmt;

use crate::persona::ReviewResult;
use crate::registry::PersonaRegistry;

const SEPARATOR: &str = "---";

/// Aggregate view over the results of one dispatch
pub struct Report<'a> {
    results: &'a [ReviewResult],
}

impl<'a> Report<'a> {
    pub fn new(results: &'a [ReviewResult]) -> Self {
        Self { results }
    }

    pub fn successes(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failures(&self) -> usize {
        self.results.len() - self.successes()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# 🔍 Multi-Persona Code Review Report")?;
        writeln!(f)?;
        writeln!(f, "📊 **Review Summary:**")?;
        writeln!(f, "- ✅ Successful reviews: {}", self.successes())?;
        writeln!(f, "- ❌ Failed reviews: {}", self.failures())?;
        writeln!(f)?;
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f)?;

        for result in self.results {
            if result.is_success() {
                writeln!(f, "## 🤖 {} - {}", result.persona_name, result.focus)?;
            } else {
                writeln!(f, "## ❌ {} - {} [ERROR]", result.persona_name, result.focus)?;
            }
            writeln!(f)?;
            writeln!(f, "{}", result.body())?;
            writeln!(f)?;
            writeln!(f, "{SEPARATOR}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Numbered persona list with usage hints, for `--list-personas`
pub fn render_persona_listing(registry: &PersonaRegistry) -> String {
    let mut out = String::from("📋 Available personas:\n");
    if registry.is_empty() {
        out.push_str("  (none)\n");
    }
    for (i, persona) in registry.personas().iter().enumerate() {
        out.push_str(&format!("  {}. {} - {}\n", i + 1, persona.name(), persona.focus()));
    }
    out.push_str("\nUsage examples:\n");
    out.push_str("  --personas 'code quality specialist'\n");
    out.push_str("  --personas 'bug hunter'\n");
    out.push_str("  --personas 'code quality specialist' 'bug hunter'  # Run both\n");
    out
}
