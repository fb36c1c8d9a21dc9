use crate::{Error, Query, Result, Source};

/// Fetches the table's DDL, checking that the source answered for the table
/// that was asked about.
pub(super) async fn create_statement<S>(source: &mut S, name: &str) -> Result<String>
where
    S: Source + ?Sized,
{
    let row = source
        .query_row(&Query::ShowCreateTable(name).to_string())
        .await?;

    if row.len() < 2 {
        return Err(Error::invalid_result(format!(
            "SHOW CREATE TABLE returned {} column(s), expected 2",
            row.len()
        )));
    }

    let returned = row.get(0).unwrap_or_default();
    if returned != name {
        return Err(Error::unexpected_table(name, returned));
    }

    let Some(sql) = row.get(1) else {
        return Err(Error::invalid_result("SHOW CREATE TABLE returned a NULL statement"));
    };

    Ok(sql.to_string())
}
