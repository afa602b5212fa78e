#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialectKind {
    MySql,
    Oracle,
}

impl SqlDialectKind {
    pub const ALL: [SqlDialectKind; 2] = [SqlDialectKind::MySql, SqlDialectKind::Oracle];

    pub fn as_str(self) -> &'static str {
        match self {
            SqlDialectKind::MySql => "mysql",
            SqlDialectKind::Oracle => "oracle",
        }
    }
}

impl std::fmt::Display for SqlDialectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
