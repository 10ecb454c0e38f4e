use colored::Colorize;

/// Console output for the operator. Errors go to stderr, everything else to stdout.
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Reporter {
        return Reporter { verbose };
    }

    pub fn log(&self, s: impl Into<String>) {
        if self.verbose {
            println!("{}", s.into().dimmed());
        }
    }

    pub fn success(&self, s: impl Into<String>) {
        println!("{}", s.into().green());
    }

    pub fn error(&self, s: impl Into<String>) {
        eprintln!("{}", s.into().red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter() {
        let r = Reporter::new(true);
        r.log("Hello world");
        r.log(String::from("foo"));
        r.success("Output saved to file output.md");
        r.error("Error executing command: boom");
    }

    #[test]
    fn test_quiet_reporter() {
        let r = Reporter::new(false);
        r.log("not printed");
    }
}
