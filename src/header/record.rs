use super::category::TuneId;
use crate::audio::clip::QuantizedClip;

/// Layout knobs for generated arrays.
#[derive(Clone, Debug)]
pub struct RecordStyle {
    pub values_per_line: usize,
    /// Placed between the element type and the array name, e.g. `__in_flash()`
    pub data_attribute: String,
}

impl Default for RecordStyle {
    fn default() -> Self {
        Self {
            values_per_line: 16,
            data_attribute: "__in_flash()".into(),
        }
    }
}

pub fn len_symbol(id: &TuneId) -> String {
    format!("TUNE_{}_LEN", id)
}

pub fn data_symbol(id: &TuneId) -> String {
    format!("TUNE_{}_DATA", id)
}

/// Render one clip as a length `#define` plus a `uint8_t` array literal.
pub fn render_record(
    id: &TuneId,
    source_name: &str,
    clip: &QuantizedClip,
    style: &RecordStyle,
) -> String {
    let per_line = style.values_per_line.max(1);
    let mut out = String::new();

    out.push_str(&format!("// {}\n", source_name));
    out.push_str(&format!("#define {} {}\n", len_symbol(id), clip.len()));
    out.push('\n');

    if style.data_attribute.is_empty() {
        out.push_str(&format!("const uint8_t {}[] = {{\n", data_symbol(id)));
    } else {
        out.push_str(&format!(
            "const uint8_t {} {}[] = {{\n",
            style.data_attribute,
            data_symbol(id)
        ));
    }

    let lines: Vec<String> = clip
        .samples
        .chunks(per_line)
        .map(|line| {
            line.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    if !clip.is_empty() {
        out.push_str("    ");
        out.push_str(&lines.join(",\n    "));
        out.push('\n');
    }
    out.push_str("};\n\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pull the values between the braces back out of a rendered record.
    fn parse_values(record: &str) -> Vec<u8> {
        let open = record.find('{').unwrap();
        let close = record.rfind('}').unwrap();
        record[open + 1..close]
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect()
    }

    fn parse_len(record: &str, id: &TuneId) -> usize {
        let prefix = format!("#define {} ", len_symbol(id));
        record
            .lines()
            .find_map(|l| l.strip_prefix(prefix.as_str()))
            .unwrap()
            .trim()
            .parse()
            .unwrap()
    }

    #[test]
    fn round_trips_values_and_length() {
        let clip = QuantizedClip {
            samples: (0..=255u8).chain((0..=99u8).rev()).collect(),
        };
        let id = TuneId::Swing(3);
        let record = render_record(&id, "swing3.wav", &clip, &RecordStyle::default());

        assert_eq!(parse_values(&record), clip.samples);
        assert_eq!(parse_len(&record, &id), clip.len());
    }

    #[test]
    fn wraps_every_sixteen_values() {
        let clip = QuantizedClip {
            samples: vec![7; 33],
        };
        let record = render_record(&TuneId::Hum, "hum.wav", &clip, &RecordStyle::default());
        let body: Vec<&str> = record
            .lines()
            .filter(|l| l.starts_with("    "))
            .collect();

        assert_eq!(body.len(), 3);
        assert_eq!(body[0].trim().split(',').filter(|s| !s.is_empty()).count(), 16);
        assert!(body[0].ends_with(','));
        assert!(body[1].ends_with(','));
        assert_eq!(body[2], "    7");
    }

    #[test]
    fn exact_layout() {
        let clip = QuantizedClip {
            samples: vec![0, 128, 255],
        };
        let style = RecordStyle {
            values_per_line: 2,
            ..RecordStyle::default()
        };
        let record = render_record(&TuneId::Poweron, "poweron.wav", &clip, &style);
        assert_eq!(
            record,
            "// poweron.wav\n\
             #define TUNE_POWERON_LEN 3\n\
             \n\
             const uint8_t __in_flash() TUNE_POWERON_DATA[] = {\n    \
             0,128,\n    \
             255\n\
             };\n\n"
        );
    }

    #[test]
    fn attribute_can_be_omitted() {
        let clip = QuantizedClip { samples: vec![0] };
        let style = RecordStyle {
            values_per_line: 16,
            data_attribute: String::new(),
        };
        let record = render_record(&TuneId::Clash(0), "clash0.wav", &clip, &style);
        assert!(record.contains("const uint8_t TUNE_CLASH0_DATA[] = {\n    0\n};"));
    }
}
