use mysql_async::Value;
use sqldump_core::Row;

/// Converts a driver row into text cells.
///
/// The text protocol delivers every non-NULL value as bytes already; the
/// other variants only show up for binary-protocol results and are formatted
/// the way the server would print them.
pub(crate) fn to_row(mut row: mysql_async::Row) -> Row {
    let values = (0..row.len())
        .map(|i| row.take::<Value, usize>(i).and_then(to_text))
        .collect();

    Row::from_vec(values)
}

pub(crate) fn to_text(value: Value) -> Option<String> {
    let text = match value {
        Value::NULL => return None,
        // Blobs that aren't valid UTF-8 are written lossily.
        Value::Bytes(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        },
        Value::Int(value) => value.to_string(),
        Value::UInt(value) => value.to_string(),
        Value::Float(value) => value.to_string(),
        Value::Double(value) => value.to_string(),
        Value::Date(year, month, day, 0, 0, 0, 0) => {
            format!("{year:04}-{month:02}-{day:02}")
        }
        Value::Date(year, month, day, hour, minute, second, 0) => {
            format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
        }
        Value::Date(year, month, day, hour, minute, second, micros) => format!(
            "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}.{micros:06}"
        ),
        Value::Time(negative, days, hours, minutes, seconds, micros) => {
            let sign = if negative { "-" } else { "" };
            let hours = u64::from(days) * 24 + u64::from(hours);
            if micros == 0 {
                format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
            } else {
                format!("{sign}{hours:02}:{minutes:02}:{seconds:02}.{micros:06}")
            }
        }
    };

    Some(text)
}
