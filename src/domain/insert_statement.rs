use crate::domain::{
    errors::{GenerateError, GenerateResult},
    order_mapping::OrderMapping,
    sql_dialect::SqlDialectKind,
};

const MYSQL_ROW_TERMINATOR: &str = ",\n";
const ORACLE_HEADER: &str = "INSERT ALL \n";
const ORACLE_FOOTER: &str = "select 1 from dual;\nCOMMIT;";

/// Renders CSV rows as one batch INSERT for a single table.
///
/// Values are wrapped in single quotes and inlined as-is. Quotes inside a
/// value are not escaped.
#[derive(Debug, Clone)]
pub struct InsertStatementGenerator {
    table_name: String,
    dialect: SqlDialectKind,
    order_mapping: OrderMapping,
    column_list: String,
}

impl InsertStatementGenerator {
    pub fn new(
        table_name: &str,
        dialect: SqlDialectKind,
        order_mapping: OrderMapping,
    ) -> GenerateResult<Self> {
        if table_name.trim().is_empty() {
            return Err(GenerateError::EmptyTableName);
        }

        let column_list = order_mapping.column_list();
        Ok(Self {
            table_name: table_name.to_string(),
            dialect,
            order_mapping,
            column_list,
        })
    }

    pub fn dialect(&self) -> SqlDialectKind {
        self.dialect
    }

    pub fn generate<I, R, F>(&self, rows: I) -> GenerateResult<String>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[F]>,
        F: AsRef<str>,
    {
        match self.dialect {
            SqlDialectKind::MySql => self.render_mysql(rows),
            SqlDialectKind::Oracle => self.render_oracle(rows),
        }
    }

    fn render_mysql<I, R, F>(&self, rows: I) -> GenerateResult<String>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[F]>,
        F: AsRef<str>,
    {
        let mut sql = format!("INSERT INTO {}({}) VALUES\n", self.table_name, self.column_list);
        let mut row_count = 0usize;
        for (position, row) in rows.into_iter().enumerate() {
            let values = self.quoted_values(position + 1, row.as_ref())?;
            sql.push('(');
            sql.push_str(&values);
            sql.push(')');
            sql.push_str(MYSQL_ROW_TERMINATOR);
            row_count += 1;
        }

        // The header alone is returned untouched when there were no rows.
        if row_count > 0 {
            sql.truncate(sql.len() - MYSQL_ROW_TERMINATOR.len());
        }
        Ok(sql)
    }

    fn render_oracle<I, R, F>(&self, rows: I) -> GenerateResult<String>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[F]>,
        F: AsRef<str>,
    {
        let mut sql = String::from(ORACLE_HEADER);
        for (position, row) in rows.into_iter().enumerate() {
            let values = self.quoted_values(position + 1, row.as_ref())?;
            sql.push_str(&format!(
                "INTO {} ({})\nVALUES ({values})\n",
                self.table_name, self.column_list
            ));
        }
        sql.push_str(ORACLE_FOOTER);
        Ok(sql)
    }

    fn quoted_values<F: AsRef<str>>(&self, row: usize, fields: &[F]) -> GenerateResult<String> {
        self.order_mapping
            .columns()
            .iter()
            .map(|column| {
                fields
                    .get(column.field_index)
                    .map(|field| format!("'{}'", field.as_ref()))
                    .ok_or(GenerateError::FieldIndexOutOfRange {
                        row,
                        index: column.field_index,
                        field_count: fields.len(),
                    })
            })
            .collect::<GenerateResult<Vec<_>>>()
            .map(|values| values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        errors::GenerateError, order_mapping::OrderMapping, sql_dialect::SqlDialectKind,
    };

    use super::InsertStatementGenerator;

    fn users_generator(dialect: SqlDialectKind) -> InsertStatementGenerator {
        let mapping = OrderMapping::parse(r#"{"id":0,"name":1}"#).expect("mapping should parse");
        InsertStatementGenerator::new("users", dialect, mapping).expect("generator should build")
    }

    fn users_rows() -> Vec<Vec<&'static str>> {
        vec![vec!["1", "Alice"], vec!["2", "Bob"]]
    }

    #[test]
    fn renders_mysql_multi_row_insert() {
        let sql = users_generator(SqlDialectKind::MySql)
            .generate(users_rows())
            .expect("sql should be generated");

        assert_eq!(
            sql,
            "INSERT INTO users(id,name) VALUES\n('1','Alice'),\n('2','Bob')"
        );
    }

    #[test]
    fn renders_oracle_insert_all_block() {
        let sql = users_generator(SqlDialectKind::Oracle)
            .generate(users_rows())
            .expect("sql should be generated");

        assert_eq!(
            sql,
            "INSERT ALL \nINTO users (id,name)\nVALUES ('1','Alice')\nINTO users (id,name)\nVALUES ('2','Bob')\nselect 1 from dual;\nCOMMIT;"
        );
    }

    #[test]
    fn reorders_and_selects_fields_by_mapping() {
        let mapping = OrderMapping::parse(r#"{"email":2,"id":0}"#).expect("mapping should parse");
        let generator = InsertStatementGenerator::new("accounts", SqlDialectKind::MySql, mapping)
            .expect("generator should build");

        let sql = generator
            .generate([["7", "ignored", "a@b.io", "extra"]])
            .expect("sql should be generated");

        assert_eq!(sql, "INSERT INTO accounts(email,id) VALUES\n('a@b.io','7')");
    }

    #[test]
    fn mysql_without_rows_is_just_the_header() {
        let sql = users_generator(SqlDialectKind::MySql)
            .generate(Vec::<Vec<String>>::new())
            .expect("empty input should not fail");

        assert_eq!(sql, "INSERT INTO users(id,name) VALUES\n");
    }

    #[test]
    fn oracle_without_rows_still_closes_the_block() {
        let sql = users_generator(SqlDialectKind::Oracle)
            .generate(Vec::<Vec<String>>::new())
            .expect("empty input should not fail");

        assert_eq!(sql, "INSERT ALL \nselect 1 from dual;\nCOMMIT;");
    }

    #[test]
    fn short_row_fails_with_field_index_error() {
        let error = users_generator(SqlDialectKind::MySql)
            .generate(vec![vec!["1", "Alice"], vec!["2"]])
            .expect_err("second row is too short");

        assert_eq!(
            error,
            GenerateError::FieldIndexOutOfRange {
                row: 2,
                index: 1,
                field_count: 1,
            }
        );
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        let sql = users_generator(SqlDialectKind::MySql)
            .generate([["3", "O'Brien"]])
            .expect("sql should be generated");

        assert_eq!(sql, "INSERT INTO users(id,name) VALUES\n('3','O'Brien')");
    }

    #[test]
    fn repeated_generation_is_identical() {
        let generator = users_generator(SqlDialectKind::Oracle);
        let first = generator.generate(users_rows()).expect("first run");
        let second = generator.generate(users_rows()).expect("second run");

        assert_eq!(first, second);
    }

    #[test]
    fn table_name_is_inserted_verbatim() {
        let mapping = OrderMapping::parse(r#"{"id":0}"#).expect("mapping should parse");
        let generator = InsertStatementGenerator::new(" users ", SqlDialectKind::MySql, mapping)
            .expect("generator should build");

        let sql = generator.generate([["1"]]).expect("sql should be generated");

        assert_eq!(sql, "INSERT INTO  users (id) VALUES\n('1')");
    }

    #[test]
    fn rejects_blank_table_name() {
        let mapping = OrderMapping::parse(r#"{"id":0}"#).expect("mapping should parse");
        let error = InsertStatementGenerator::new("  ", SqlDialectKind::MySql, mapping)
            .expect_err("blank table name should be rejected");

        assert_eq!(error, GenerateError::EmptyTableName);
    }
}
