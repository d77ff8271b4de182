//! Unit tests for message classification and filtering.

use rstest::{fixture, rstest};

use crate::transcript::domain::{Element, ExportConfig, Label, Message, Role};
use crate::transcript::services::MessageLabeler;

fn message(role: Role, elements: Vec<Element>) -> Message {
    Message::new("1302425", role, "张三", "2024-03-01 20:15:03", elements)
}

#[fixture]
fn labeler() -> MessageLabeler {
    MessageLabeler::new(ExportConfig::default())
}

fn config_with(adjust: impl FnOnce(&mut ExportConfig)) -> ExportConfig {
    let mut config = ExportConfig::default();
    adjust(&mut config);
    config
}

// ============================================================================
// Classification
// ============================================================================

#[rstest]
fn narrative_is_segmented(labeler: MessageLabeler) {
    let labeled = labeler
        .label(message(Role::Pl, vec![Element::text("“你好”，PC顿了顿道，“非常好”")]))
        .expect("message should be kept");

    assert_eq!(
        labeled.elements(),
        [
            Element::labeled("你好", Label::Speech),
            Element::labeled("，PC顿了顿道，", Label::Action),
            Element::labeled("非常好", Label::Speech),
        ]
    );
    assert_eq!(labeled.nickname(), "张三");
    assert_eq!(labeled.role(), Role::Pl);
}

#[rstest]
#[case::spaces("  他推开了门。  ")]
#[case::newlines("\n他推开了门。\n")]
fn quote_free_narrative_is_one_trimmed_action(labeler: MessageLabeler, #[case] text: &str) {
    let labeled = labeler
        .label(message(Role::Pl, vec![Element::text(text)]))
        .expect("message should be kept");

    assert_eq!(
        labeled.elements(),
        [Element::labeled("他推开了门。", Label::Action)]
    );
}

#[rstest]
#[case::dot(".r1d100")]
#[case::full_stop("。ra 侦查")]
#[case::slash("/st 力量 50")]
#[case::leading_space("  .r3d6")]
fn command_echo_labels_first_element_only(labeler: MessageLabeler, #[case] command: &str) {
    let labeled = labeler
        .label(message(
            Role::Pl,
            vec![Element::text(command), Element::text("附加说明")],
        ))
        .expect("message should be kept");

    assert_eq!(
        labeled.elements(),
        [
            Element::labeled(command, Label::Command),
            Element::labeled("附加说明", Label::Invalid),
        ]
    );
}

#[rstest]
#[case::ascii("(去吃饭了)")]
#[case::full_width("（等我一下）")]
fn comment_is_outside_throughout(labeler: MessageLabeler, #[case] comment: &str) {
    let labeled = labeler
        .label(message(
            Role::Pl,
            vec![Element::text(comment), Element::text("“马上”")],
        ))
        .expect("message should be kept");

    assert!(
        labeled
            .elements()
            .iter()
            .all(|element| element.label() == Some(Label::Outside))
    );
    assert_eq!(labeled.elements()[1].content(), "“马上”");
}

#[rstest]
fn image_first_message_is_narrative(labeler: MessageLabeler) {
    let labeled = labeler
        .label(message(
            Role::Pl,
            vec![Element::image("http://a.com/1.png"), Element::text(".不是命令")],
        ))
        .expect("message should be kept");

    assert_eq!(
        labeled.elements(),
        [
            Element::image("http://a.com/1.png"),
            Element::labeled(".不是命令", Label::Action),
        ]
    );
}

// ============================================================================
// Filtering
// ============================================================================

#[rstest]
fn empty_message_is_dropped(labeler: MessageLabeler) {
    assert_eq!(labeler.label(message(Role::Pl, Vec::new())), None);
}

#[rstest]
fn hidden_commands_drop_dice_bot_and_command_echo() {
    let labeler = MessageLabeler::new(config_with(|config| config.display_dice_command = false));

    let reply = message(Role::Dicer, vec![Element::text("张三掷骰：D100=42")]);
    let echo = message(Role::Pl, vec![Element::text(".r1d100")]);
    let story = message(Role::Pl, vec![Element::text("他点了点头。")]);

    assert_eq!(labeler.label(reply), None);
    assert_eq!(labeler.label(echo), None);
    assert!(labeler.label(story).is_some());
}

#[rstest]
fn dice_bot_reply_is_kept_when_commands_are_shown(labeler: MessageLabeler) {
    let labeled = labeler
        .label(message(Role::Dicer, vec![Element::text("张三掷骰：D100=42")]))
        .expect("message should be kept");

    assert_eq!(
        labeled.elements(),
        [Element::labeled("张三掷骰：D100=42", Label::Action)]
    );
}

#[rstest]
fn hidden_comments_are_dropped() {
    let labeler =
        MessageLabeler::new(config_with(|config| config.display_external_comment = false));

    assert_eq!(
        labeler.label(message(Role::Pl, vec![Element::text("（去吃饭了）")])),
        None
    );
}

#[rstest]
#[case::shown(true)]
#[case::hidden(false)]
fn image_only_message_follows_display_image(#[case] display_image: bool) {
    let labeler = MessageLabeler::new(config_with(|config| config.display_image = display_image));
    let image = message(Role::Pl, vec![Element::image("http://a.com/1.png")]);

    let labeled = labeler.label(image.clone());

    assert_eq!(labeled, display_image.then_some(image));
}

#[rstest]
#[case::narrative("他说“走吧”")]
#[case::command(".r1d100")]
#[case::comment("（图）")]
fn hidden_images_are_removed_from_mixed_messages(#[case] text: &str) {
    let labeler = MessageLabeler::new(config_with(|config| config.display_image = false));

    let labeled = labeler
        .label(message(
            Role::Pl,
            vec![Element::text(text), Element::image("http://a.com/1.png")],
        ))
        .expect("message should be kept");

    assert!(!labeled.elements().iter().any(Element::is_image));
}

#[rstest]
fn shown_images_appear_once(labeler: MessageLabeler) {
    let labeled = labeler
        .label(message(
            Role::Pl,
            vec![
                Element::text("看这个"),
                Element::image("http://a.com/1.png"),
                Element::text("“怎么样”"),
            ],
        ))
        .expect("message should be kept");

    assert_eq!(
        labeled.elements(),
        [
            Element::labeled("看这个", Label::Action),
            Element::image("http://a.com/1.png"),
            Element::labeled("怎么样", Label::Speech),
        ]
    );
}

#[rstest]
fn story_only_keeps_in_character_content() {
    let labeler = MessageLabeler::new(ExportConfig::story_only());

    let kept: Vec<_> = [
        message(Role::Pl, vec![Element::text(".ra 侦查")]),
        message(Role::Dicer, vec![Element::text("侦查检定：成功")]),
        message(Role::Ob, vec![Element::text("(好紧张)")]),
        message(Role::Gm, vec![Element::text("门后传来了脚步声。")]),
    ]
    .into_iter()
    .filter_map(|message| labeler.label(message))
    .collect();

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].role(), Role::Gm);
}
