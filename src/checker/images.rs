use std::io::Write;

use regex::Regex;

use super::report::ValidationReport;

/// Fixed branding asset whose declared dimensions are verified.
pub const LOGO_ASSET: &str = "brand-logo.png";

const EXPECTED_WIDTH: &str = "1200";
const EXPECTED_HEIGHT: &str = "630";
const EXPECTED_INSTANCES: usize = 3;

/// Verifies the declared width/height of every brand logo reference.
///
/// The pattern associates the logo filename with the nearest `width` and
/// `height` attributes on the following lines. That bounded-distance
/// association matches the hand-authored article template, not arbitrary
/// HTML; attribute order is assumed.
pub struct ImageDimensionCheck {
    logo_pattern: Regex,
}

impl Default for ImageDimensionCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDimensionCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            logo_pattern: Regex::new(
                r"(?s)brand-logo\.png.*?\n.*?width.*?(\d+).*?\n.*?height.*?(\d+)",
            )
            .expect("Invalid regex"),
        }
    }

    pub fn run(&self, content: &str, report: &mut ValidationReport, progress: &mut dyn Write) {
        writeln!(progress, "📐 Checking image dimensions...").ok();

        let mut instances = 0usize;
        for (i, caps) in self.logo_pattern.captures_iter(content).enumerate() {
            instances += 1;
            let width = caps.get(1).map_or("", |m| m.as_str());
            let height = caps.get(2).map_or("", |m| m.as_str());

            if width == EXPECTED_WIDTH && height == EXPECTED_HEIGHT {
                writeln!(progress, "   ✅ Instance #{}: {width}x{height}", i + 1).ok();
            } else {
                report.push_issue(format!(
                    "❌ {LOGO_ASSET} instance #{}: {width}x{height} (should be {EXPECTED_WIDTH}x{EXPECTED_HEIGHT})",
                    i + 1
                ));
            }
        }

        // A document without the asset is not using the logo at all;
        // only a wrong nonzero count is worth flagging.
        if instances > 0 && instances != EXPECTED_INSTANCES {
            report.push_warning(format!(
                "⚠️  Found {instances} {LOGO_ASSET} instances (expected {EXPECTED_INSTANCES})"
            ));
        }
    }
}

#[cfg(test)]
#[path = "images_tests.rs"]
mod tests;
