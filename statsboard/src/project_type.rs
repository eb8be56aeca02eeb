/// Mission types known to the platform. Codes arrive as strings in the stats
/// API; anything missing or unrecognised is treated as [`ProjectType::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Unknown,
    BuildArea,
    Footprint,
    ChangeDetection,
    Completeness,
}

impl ProjectType {
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some("1") => ProjectType::BuildArea,
            Some("2") => ProjectType::Footprint,
            Some("3") => ProjectType::ChangeDetection,
            Some("4") => ProjectType::Completeness,
            _ => ProjectType::Unknown,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ProjectType::Unknown => "-1",
            ProjectType::BuildArea => "1",
            ProjectType::Footprint => "2",
            ProjectType::ChangeDetection => "3",
            ProjectType::Completeness => "4",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ProjectType::Unknown => "Unknown",
            ProjectType::BuildArea => "Build Area",
            ProjectType::Footprint => "Footprint",
            ProjectType::ChangeDetection => "Change Detection",
            ProjectType::Completeness => "Completeness",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ProjectType::Unknown => "#808080",
            ProjectType::BuildArea => "#f8a769",
            ProjectType::Footprint => "#bbcb7d",
            ProjectType::ChangeDetection => "#79aeeb",
            ProjectType::Completeness => "#fb8072",
        }
    }
}
