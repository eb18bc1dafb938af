//! SubRip ingestion tests.

use ass_script::{
    parser::{ast::TextDialect, srt::parse_srt},
    BoldWeight, Color, CoreError, ParserConfig, Part, Script, ScriptFormat,
};

const MOVIE: &str = "1
00:00:10,500 --> 00:00:13,000
Elephant's Dream

2
00:00:15,000 --> 00:00:18,000 X1:63 X2:223 Y1:43 Y2:58
At the left we can see...
<i>...and at the right</i>

3
00:01:00,250 --> 00:01:02,000
<font color=\"#00FF00\">Green <b>and bold</b>
";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_auto_detects_srt() {
        let script = Script::parse(MOVIE).expect("srt should parse");
        let dialogues = script.dialogues();

        assert_eq!(dialogues.len(), 3);
        assert!(dialogues.iter().all(|d| d.dialect() == TextDialect::Srt));
        assert_eq!(dialogues[0].start(), 10.5);
        assert_eq!(dialogues[0].end(), 13.0);
        assert_eq!(
            dialogues[0].parts(),
            [Part::Text("Elephant's Dream".to_string())]
        );
        assert_eq!(dialogues[2].start(), 60.25);
    }

    #[test]
    fn test_positioning_is_ignored_and_lines_kept() {
        let script = Script::from_str_with_format(MOVIE, ScriptFormat::Srt).expect("srt should parse");
        let second = &script.dialogues()[1];

        assert_eq!(second.end(), 18.0);
        assert_eq!(
            second.parts(),
            [
                Part::Text("At the left we can see...".to_string()),
                Part::NewLine,
                Part::Italic(Some(true)),
                Part::Text("...and at the right".to_string()),
                Part::Italic(Some(false)),
            ]
        );
    }

    #[test]
    fn test_unclosed_font_still_ends_color() {
        let script = Script::parse(MOVIE).expect("srt should parse");

        assert_eq!(
            script.dialogues()[2].parts(),
            [
                Part::PrimaryColor(Some(Color::new(0, 255, 0, 1.0))),
                Part::Text("Green ".to_string()),
                Part::Bold(Some(BoldWeight::Toggle(true))),
                Part::Text("and bold".to_string()),
                Part::Bold(Some(BoldWeight::Toggle(false))),
                Part::PrimaryColor(None),
            ]
        );
    }

    #[test]
    fn test_every_dialogue_uses_default_style() {
        let script = Script::parse(MOVIE).expect("srt should parse");

        assert_eq!(script.styles().len(), 1);
        for dialogue in script.dialogues() {
            assert_eq!(dialogue.style().name(), "Default");
            assert_eq!(dialogue.alignment(), 2);
        }
    }

    #[test]
    fn test_bad_times_are_skipped_unless_strict() {
        let text = "1\n00:00:xx,000 --> 00:00:02,000\nbad\n\n2\n00:00:03,000 --> 00:00:04,000\ngood\n";

        let script = parse_srt(text, ParserConfig::default()).expect("lenient parse");
        assert_eq!(script.dialogues().len(), 1);
        assert_eq!(script.issues().len(), 1);
        assert_eq!(script.issues()[0].line, 1);

        assert!(matches!(
            parse_srt(text, ParserConfig::default().with_strict(true)),
            Err(CoreError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_empty_input_has_no_dialogues() {
        let script = parse_srt("\n\n", ParserConfig::default()).expect("empty parse");
        assert!(script.dialogues().is_empty());
        assert!(script.issues().is_empty());
    }
}
