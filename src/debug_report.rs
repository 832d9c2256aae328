use firerules::{Checks, CompileDetails, Options};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print a compile summary on stderr, leaving stdout to the compiled JSON.
pub fn print_report(source: &str, options: &Options, details: &CompileDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Compiled: {source}"), ansi::CYAN)));

    eprintln!("\n{}", palette.paint("━━━ Checks ━━━", ansi::GRAY));
    print_checks(options.checks, &palette);

    eprintln!("\n{}", palette.paint("━━━ Tree ━━━", ansi::GRAY));
    print_counts(details, &palette);

    eprintln!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    eprintln!("  Total: {}", palette.paint(format!("{:?}", details.elapsed), ansi::GREEN));
    eprintln!();
}

fn print_checks(checks: Checks, palette: &ansi::Palette) {
    let names = [
        (Checks::RESERVED_KEYS, "reserved keys"),
        (Checks::WILDCARDS, "wildcards"),
        (Checks::PERMISSIONS, "permissions"),
    ];
    for (flag, name) in names {
        let state = if checks.contains(flag) {
            palette.paint("✓ on", ansi::GREEN)
        } else {
            palette.dim("✗ off")
        };
        eprintln!("  {} {}", palette.paint(format!("{name:<14}"), ansi::BLUE), state);
    }
}

fn print_counts(details: &CompileDetails, palette: &ansi::Palette) {
    let rows = [
        ("locations", details.locations),
        ("expressions", details.expressions),
        ("thunks", details.thunks),
        ("index hints", details.index_hints),
        ("scalars", details.scalars),
        ("max depth", details.max_depth),
    ];
    for (label, count) in rows {
        eprintln!("  {} {}", palette.dim(format!("{label:<14}")), palette.paint(count.to_string(), ansi::YELLOW));
    }

    if details.leaves() == 0 {
        eprintln!("\n{}", palette.dim("  No rules defined"));
    }
}
