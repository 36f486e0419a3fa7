pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        println!("Verbose: {}", msg);
    }
}

pub fn log_error(msg: &str) {
    eprintln!("Error: {}", msg);
}

pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn log(&self, msg: &str) {
        print_verbose(self.enabled, msg);
    }
}
