use super::category::{ListKind, TuneId};
use super::record::{data_symbol, len_symbol};

pub fn count_symbol(list: ListKind) -> String {
    format!("TUNES_{}_COUNT", list.kind().symbol())
}

/// `#define TUNES_SWING_COUNT n` and `#define TUNES_CLASH_COUNT m`
pub fn render_counts(swing: usize, clash: usize) -> String {
    format!(
        "#define {} {}\n#define {} {}\n\n",
        count_symbol(ListKind::Swing),
        swing,
        count_symbol(ListKind::Clash),
        clash
    )
}

/// Pointer and length tables indexing every tune of a swing/clash category.
///
/// An empty category still gets both (empty) tables.
pub fn render_tables(list: ListKind, count: usize) -> String {
    let ids: Vec<TuneId> = (0..count).map(|i| list.id(i)).collect();
    let symbol = list.kind().symbol();

    let mut out = String::new();
    out.push_str(&format!("const uint8_t *TUNES_{}_DATA[] = {{\n", symbol));
    out.push_str(&table_body(ids.iter().map(data_symbol)));
    out.push_str("};\n\n");

    out.push_str(&format!("uint32_t TUNES_{}_LENS[] = {{\n", symbol));
    out.push_str(&table_body(ids.iter().map(len_symbol)));
    out.push_str("};\n\n");
    out
}

fn table_body(entries: impl Iterator<Item = String>) -> String {
    let entries: Vec<String> = entries.map(|e| format!("    {}", e)).collect();
    if entries.is_empty() {
        return String::new();
    }
    format!("{}\n", entries.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        assert_eq!(
            render_counts(2, 0),
            "#define TUNES_SWING_COUNT 2\n#define TUNES_CLASH_COUNT 0\n\n"
        );
    }

    #[test]
    fn tables_list_entries_in_index_order() {
        let tables = render_tables(ListKind::Swing, 2);
        assert_eq!(
            tables,
            "const uint8_t *TUNES_SWING_DATA[] = {\n    \
             TUNE_SWING0_DATA,\n    \
             TUNE_SWING1_DATA\n\
             };\n\n\
             uint32_t TUNES_SWING_LENS[] = {\n    \
             TUNE_SWING0_LEN,\n    \
             TUNE_SWING1_LEN\n\
             };\n\n"
        );
    }

    #[test]
    fn clash_tables_reference_only_clash_tunes() {
        let tables = render_tables(ListKind::Clash, 2);
        assert!(!tables.contains("SWING"));
        assert!(tables.contains("    TUNE_CLASH0_DATA,\n    TUNE_CLASH1_DATA\n};"));
        assert!(tables.contains("    TUNE_CLASH0_LEN,\n    TUNE_CLASH1_LEN\n};"));
    }

    #[test]
    fn empty_category_keeps_both_tables() {
        let tables = render_tables(ListKind::Clash, 0);
        assert_eq!(
            tables,
            "const uint8_t *TUNES_CLASH_DATA[] = {\n};\n\nuint32_t TUNES_CLASH_LENS[] = {\n};\n\n"
        );
    }

    #[test]
    fn table_length_equals_count() {
        let tables = render_tables(ListKind::Clash, 5);
        assert_eq!(tables.matches("_DATA,").count() + tables.matches("_DATA\n").count(), 5);
        assert_eq!(tables.matches("_LEN,").count() + tables.matches("_LEN\n").count(), 5);
        assert!(tables.contains("    TUNE_CLASH4_LEN\n};"));
    }
}
