use std::borrow::Cow;
use std::io::{self, Write};

use crate::snapshot::MemberStats;

const HEADER: [&str; 4] = ["User", "Total swipes", "Mission contributed", "Time spent(mins)"];

/// Writes one CSV row per group member, header first.
pub fn write_csv<W: Write>(members: &[MemberStats], mut out: W) -> io::Result<()> {
    writeln!(out, "{}", HEADER.join(","))?;
    for member in members {
        writeln!(
            out,
            "{},{},{},{}",
            escape(&member.user_name),
            member.total_swipes,
            member.total_mapping_projects,
            member.total_swipe_time,
        )?;
    }
    out.flush()
}

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn member(name: &str, swipes: i64) -> MemberStats {
        MemberStats {
            user_name: name.to_owned(),
            total_swipes: swipes,
            total_mapping_projects: 3,
            total_swipe_time: 42,
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&[member("ada", 120), member("grace", 7)], &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            indoc! {"
                User,Total swipes,Mission contributed,Time spent(mins)
                ada,120,3,42
                grace,7,3,42
            "}
        );
    }

    #[test]
    fn quotes_awkward_names() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("Smith, J"), "\"Smith, J\"");
        assert_eq!(escape("the \"mapper\""), "\"the \"\"mapper\"\"\"");
    }

    #[test]
    fn no_members_still_writes_header() {
        let mut buf = Vec::new();
        write_csv(&[], &mut buf).unwrap();
        assert_eq!(buf, b"User,Total swipes,Mission contributed,Time spent(mins)\n");
    }
}
