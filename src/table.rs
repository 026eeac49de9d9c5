//! Plain-text table rendering for the report output.

/// Renders rows into space-padded columns with a two-space gutter.
///
/// With headers, a dashed rule separates them from the body. Columns whose
/// body cells are all integers are right-aligned; everything else is
/// left-aligned. Ragged rows are padded with empty cells.
pub fn render(headers: Option<&[&str]>, rows: &[Vec<String>]) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(headers.map(<[&str]>::len))
        .max()
        .unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let mut widths = vec![0usize; columns];
    if let Some(headers) = headers {
        for (i, h) in headers.iter().enumerate() {
            widths[i] = widths[i].max(h.chars().count());
        }
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let numeric: Vec<bool> = (0..columns)
        .map(|i| {
            let cells = rows.iter().filter_map(|r| r.get(i)).filter(|c| !c.is_empty());
            let mut any = false;
            for cell in cells {
                if cell.parse::<u64>().is_err() {
                    return false;
                }
                any = true;
            }
            any
        })
        .collect();

    let mut out = String::new();
    if let Some(headers) = headers {
        let cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        push_row(&mut out, &cells, &widths, &numeric);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_row(&mut out, &rule, &widths, &numeric);
    }
    for row in rows {
        push_row(&mut out, row, &widths, &numeric);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize], numeric: &[bool]) {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        if i > 0 {
            line.push_str("  ");
        }
        let pad = width.saturating_sub(cell.chars().count());
        if numeric[i] {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
