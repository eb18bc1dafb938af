//! JSON shape of the serialized data model.
#![cfg(feature = "serde")]

use ass_script::{BoldWeight, Part, Script};
use serde_json::{json, Value};

const SIGNS: &str = r"[Script Info]
PlayResX: 1280

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, Bold, Alignment
Style: *Sign,Verdana,48,&H0000FFFF,-1,8

[Events]
Format: Layer, Start, End, Style, Text
Dialogue: 1,0:00:02.00,0:00:06.00,Sign,{\an7\pos(100,200)}Top\Nleft
";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn to_json(script: &Script) -> Value {
        serde_json::to_value(script).expect("script serializes")
    }

    #[test]
    fn test_dialogue_refers_to_style_by_name() {
        let script = Script::parse(SIGNS).expect("script should parse");
        let value = to_json(&script);

        let dialogue = &value["dialogues"][0];
        assert_eq!(dialogue["style"], json!("Sign"));
        assert_eq!(dialogue["id"], json!(1));
        assert_eq!(dialogue["layer"], json!(1));
        assert_eq!(dialogue["start"], json!(2.0));
        assert_eq!(dialogue["end"], json!(6.0));
        assert_eq!(dialogue["comment"], json!(false));
        assert_eq!(dialogue["alignment"], json!(7));
        assert_eq!(dialogue["text"], json!(r"{\an7\pos(100,200)}Top\Nleft"));
    }

    #[test]
    fn test_parts_are_externally_tagged() {
        let script = Script::parse(SIGNS).expect("script should parse");
        let value = to_json(&script);

        assert_eq!(
            value["dialogues"][0]["parts"],
            json!([
                { "Alignment": 7 },
                { "Position": { "x": 100.0, "y": 200.0 } },
                { "Text": "Top" },
                "NewLine",
                { "Text": "left" }
            ])
        );
    }

    #[test]
    fn test_styles_and_properties_are_listed() {
        let script = Script::parse(SIGNS).expect("script should parse");
        let value = to_json(&script);

        assert_eq!(value["properties"]["resolution_x"], json!(1280));
        assert_eq!(value["attachments"], json!([]));

        let styles = value["styles"].as_array().expect("styles array");
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0]["name"], json!("Sign"));
        assert_eq!(styles[0]["font_name"], json!("Verdana"));
        assert_eq!(styles[0]["font_size"], json!(48.0));
        assert_eq!(styles[0]["alignment"], json!(8));
        assert_eq!(
            styles[0]["primary_color"],
            json!({ "red": 255, "green": 255, "blue": 0, "alpha": 1.0 })
        );
    }

    #[test]
    fn test_nested_transform_part_reads_back() {
        let part = Part::Transform {
            start: Some(0.5),
            end: None,
            accel: Some(2.0),
            tags: vec![Part::Bold(Some(BoldWeight::Numeric(700)))],
        };
        let value = serde_json::to_value(&part).expect("part serializes");

        assert_eq!(
            value,
            json!({
                "Transform": {
                    "start": 0.5,
                    "end": null,
                    "accel": 2.0,
                    "tags": [{ "Bold": { "Numeric": 700 } }]
                }
            })
        );
        let back: Part = serde_json::from_value(value).expect("part deserializes");
        assert_eq!(back, part);
    }
}
