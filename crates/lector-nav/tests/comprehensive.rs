//! Comprehensive tests for lector-nav
//!
//! Exercises visibility, naming, classification, table heuristics, state
//! extraction, and leaf traversal against hand-built documents.

use lector_aria::AttrRoleOracle;
use lector_dom::{DomTree, NodeId, Tag};
use lector_nav::{Activation, ActivationHandler, EnglishMessages, NavError, Reader, Verbosity};
use lector_style::{ComputedStyle, Display, StyleSheet, Visibility};

struct Fixture {
    tree: DomTree,
    styles: StyleSheet,
    roles: AttrRoleOracle,
    msgs: EnglishMessages,
}

impl Fixture {
    fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        Self {
            tree: DomTree::new(),
            styles: StyleSheet::new(),
            roles: AttrRoleOracle::new(),
            msgs: EnglishMessages::new(),
        }
    }

    fn reader(&self) -> Reader<'_> {
        Reader::new(&self.tree, &self.styles, &self.roles, &self.msgs)
    }

    fn elem(&mut self, parent: NodeId, tag: Tag) -> NodeId {
        let id = self.tree.create_element(tag);
        self.tree.append_child(parent, id);
        id
    }

    fn text(&mut self, parent: NodeId, content: &str) -> NodeId {
        let id = self.tree.create_text(content);
        self.tree.append_child(parent, id);
        id
    }
}

// ---------------------------------------------------------------- visibility

#[test]
fn test_visibility_hidden_ancestor_does_not_hide_visible_descendant() {
    let mut f = Fixture::new();
    let div = f.elem(NodeId::ROOT, Tag::Div);
    let span = f.elem(div, Tag::Span);
    f.text(span, "shown");
    f.styles
        .set(div, ComputedStyle::visible().visibility(Visibility::Hidden));

    let r = f.reader();
    assert!(r.is_visible(span), "descendant can override visibility:hidden");
    // The div itself still counts as visible through its subtree.
    assert!(r.is_visible(div));
}

#[test]
fn test_display_none_hides_whole_subtree() {
    let mut f = Fixture::new();
    let div = f.elem(NodeId::ROOT, Tag::Div);
    let span = f.elem(div, Tag::Span);
    f.styles
        .set(div, ComputedStyle::visible().display(Display::None));

    let r = f.reader();
    assert!(!r.is_visible(div));
    assert!(!r.is_visible(span), "display:none cannot be overridden below");
}

#[test]
fn test_zero_opacity_hides_subtree() {
    let mut f = Fixture::new();
    let div = f.elem(NodeId::ROOT, Tag::Div);
    let span = f.elem(div, Tag::Span);
    f.styles.set(div, ComputedStyle::visible().opacity(0.0));

    let r = f.reader();
    assert!(!r.is_visible(span));
}

#[test]
fn test_forced_visible_overrides_css() {
    let mut f = Fixture::new();
    let div = f.elem(NodeId::ROOT, Tag::Div);
    let span = f.elem(div, Tag::Span);
    f.styles
        .set(div, ComputedStyle::visible().display(Display::None));
    f.tree.set_attr(span, "aria-hidden", "false");

    let r = f.reader();
    assert!(r.is_visible(span), "aria-hidden=false beats display:none");
}

// ------------------------------------------------------------------- naming

#[test]
fn test_aria_label_beats_text_content() {
    let mut f = Fixture::new();
    let div = f.elem(NodeId::ROOT, Tag::Div);
    f.tree.set_attr(div, "aria-label", "Close");
    f.text(div, "X");

    assert_eq!(f.reader().name(div), "Close");
}

#[test]
fn test_aria_labelledby_concatenates_targets() {
    let mut f = Fixture::new();
    let a = f.elem(NodeId::ROOT, Tag::Span);
    let b = f.elem(NodeId::ROOT, Tag::Span);
    let target = f.elem(NodeId::ROOT, Tag::Div);
    f.tree.set_attr(a, "id", "first");
    f.tree.set_attr(b, "id", "second");
    f.text(a, "Billing");
    f.text(b, "Address");
    f.tree.set_attr(target, "aria-labelledby", "first second");

    assert_eq!(f.reader().name(target), "Billing Address");
}

#[test]
fn test_label_for_names_control() {
    let mut f = Fixture::new();
    let label = f.elem(NodeId::ROOT, Tag::Label);
    let input = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(label, "for", "agree");
    f.text(label, "I agree");
    f.tree.set_attr(input, "id", "agree");
    f.tree.set_attr(input, "type", "checkbox");

    assert_eq!(f.reader().name(input), "I agree");
}

#[test]
fn test_label_for_honors_nonrecursive_lookup() {
    let mut f = Fixture::new();
    let label = f.elem(NodeId::ROOT, Tag::Label);
    let input = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(label, "for", "qty");
    f.text(label, "Quantity");
    f.tree.set_attr(input, "id", "qty");
    f.tree.set_attr(input, "type", "checkbox");

    let r = f.reader();
    assert_eq!(r.name(input), "Quantity");
    // The label text lives in its children, so a non-recursive lookup
    // must come back empty instead of descending into the label.
    assert_eq!(r.name_with(input, false, true), "");
}

#[test]
fn test_enclosing_label_names_control() {
    let mut f = Fixture::new();
    let label = f.elem(NodeId::ROOT, Tag::Label);
    f.text(label, "Subscribe");
    let input = f.elem(label, Tag::Input);
    f.tree.set_attr(input, "type", "checkbox");

    assert_eq!(f.reader().name(input), "Subscribe");
}

#[test]
fn test_submit_and_reset_defaults() {
    let mut f = Fixture::new();
    let submit = f.elem(NodeId::ROOT, Tag::Input);
    let reset = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(submit, "type", "submit");
    f.tree.set_attr(reset, "type", "reset");

    let r = f.reader();
    assert_eq!(r.name(submit), "Submit");
    assert_eq!(r.name(reset), "Reset");
}

#[test]
fn test_submit_value_overrides_default() {
    let mut f = Fixture::new();
    let submit = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(submit, "type", "submit");
    f.tree.set_attr(submit, "value", "Send");

    assert_eq!(f.reader().name(submit), "Send");
}

#[test]
fn test_placeholder_blending() {
    let mut f = Fixture::new();
    let input = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(input, "type", "text");
    f.tree.set_attr(input, "placeholder", "type here");
    f.tree.set_attr(input, "aria-label", "Query");

    // Label but no value: blend label with hint.
    assert_eq!(f.reader().name(input), "Query with hint type here");

    // Label and value: just the label.
    f.tree.set_attr(input, "value", "rust");
    assert_eq!(f.reader().name(input), "Query");

    // No label: placeholder alone.
    f.tree.remove_attr(input, "aria-label");
    f.tree.remove_attr(input, "value");
    assert_eq!(f.reader().name(input), "type here");
}

#[test]
fn test_image_title_from_filename() {
    let mut f = Fixture::new();
    let short = f.elem(NodeId::ROOT, Tag::Img);
    let long = f.elem(NodeId::ROOT, Tag::Img);
    let data = f.elem(NodeId::ROOT, Tag::Img);
    let alt = f.elem(NodeId::ROOT, Tag::Img);
    f.tree.set_attr(short, "src", "/images/photo.png");
    f.tree
        .set_attr(long, "src", "/images/3f9a2c71e0b54d88a1.png");
    f.tree.set_attr(data, "src", "data:image/png;base64,AAAA");
    f.tree.set_attr(alt, "src", "/images/photo.png");
    f.tree.set_attr(alt, "alt", "A sunset");

    let r = f.reader();
    assert_eq!(r.name(short), "photo Image");
    assert_eq!(r.name(long), "Image", "long filenames are not names");
    assert_eq!(r.name(data), "Image");
    assert_eq!(r.name(alt), "A sunset");
}

#[test]
fn test_fieldset_named_by_legends() {
    let mut f = Fixture::new();
    let fieldset = f.elem(NodeId::ROOT, Tag::Fieldset);
    let legend = f.elem(fieldset, Tag::Legend);
    f.text(legend, "Shipping");
    f.elem(fieldset, Tag::Input);

    assert_eq!(f.reader().name(fieldset), "Shipping");
}

#[test]
fn test_adjacent_spans_join_without_space() {
    let mut f = Fixture::new();
    let p = f.elem(NodeId::ROOT, Tag::P);
    let s1 = f.elem(p, Tag::Span);
    let s2 = f.elem(p, Tag::Span);
    f.text(s1, "Hel");
    f.text(s2, "lo");

    assert_eq!(f.reader().name(p), "Hello");
}

#[test]
fn test_hidden_child_excluded_from_name() {
    let mut f = Fixture::new();
    let p = f.elem(NodeId::ROOT, Tag::P);
    let shown = f.elem(p, Tag::Mark);
    let hidden = f.elem(p, Tag::Mark);
    f.text(shown, "visible");
    f.text(hidden, "secret");
    f.styles
        .set(hidden, ComputedStyle::visible().display(Display::None));

    assert_eq!(f.reader().name(p), "visible");
}

// ------------------------------------------------------------ classification

#[test]
fn test_anchor_without_href_not_focusable() {
    let mut f = Fixture::new();
    let bare = f.elem(NodeId::ROOT, Tag::A);
    let link = f.elem(NodeId::ROOT, Tag::A);
    let tab = f.elem(NodeId::ROOT, Tag::A);
    f.tree.set_attr(link, "href", "/page");
    f.tree.set_attr(tab, "tabindex", "0");

    let r = f.reader();
    assert!(!r.is_focusable(bare));
    assert!(r.is_focusable(link));
    assert!(r.is_focusable(tab));
}

#[test]
fn test_negative_tabindex_still_focusable_when_explicit() {
    let mut f = Fixture::new();
    let div = f.elem(NodeId::ROOT, Tag::Div);
    f.tree.set_attr(div, "tabindex", "-1");
    assert!(f.reader().is_focusable(div));
}

#[test]
fn test_hidden_input_is_not_a_control() {
    let mut f = Fixture::new();
    let input = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(input, "type", "hidden");
    let r = f.reader();
    assert!(!r.is_control(input));
    assert!(!r.is_focusable(input));
}

#[test]
fn test_disabled_propagates_from_fieldset() {
    let mut f = Fixture::new();
    let fieldset = f.elem(NodeId::ROOT, Tag::Fieldset);
    f.tree.set_attr(fieldset, "disabled", "");
    let input = f.elem(fieldset, Tag::Input);
    assert!(f.reader().is_disabled(input));
}

#[test]
fn test_link_is_leaf_unless_it_wraps_a_heading() {
    let mut f = Fixture::new();
    let plain = f.elem(NodeId::ROOT, Tag::A);
    f.tree.set_attr(plain, "href", "/a");
    f.text(plain, "go");

    let wrapping = f.elem(NodeId::ROOT, Tag::A);
    f.tree.set_attr(wrapping, "href", "/b");
    let h2 = f.elem(wrapping, Tag::H2);
    f.text(h2, "Section");

    let r = f.reader();
    assert!(r.is_leaf_node(plain));
    assert!(!r.is_leaf_node(wrapping), "heading inside link stays reachable");
}

#[test]
fn test_composite_with_focusable_children_is_not_leaf_control() {
    let mut f = Fixture::new();
    let listbox = f.elem(NodeId::ROOT, Tag::Div);
    f.tree.set_attr(listbox, "role", "listbox");
    f.tree.set_attr(listbox, "tabindex", "0");
    let opt = f.elem(listbox, Tag::Div);
    f.tree.set_attr(opt, "role", "option");
    f.tree.set_attr(opt, "tabindex", "0");

    let r = f.reader();
    assert!(r.is_control(listbox));
    assert!(!r.is_leaf_level_control(listbox));
    assert_eq!(r.count_focusable_descendants(listbox), 1);

    // Without focusable children the composite is driven by
    // active-descendant state and stays atomic.
    f.tree.remove_attr(opt, "tabindex");
    assert!(f.reader().is_leaf_level_control(listbox));
}

#[test]
fn test_label_text_has_no_standalone_content() {
    let mut f = Fixture::new();
    let label = f.elem(NodeId::ROOT, Tag::Label);
    f.tree.set_attr(label, "for", "q");
    let text = f.text(label, "Search");
    let input = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(input, "id", "q");

    let r = f.reader();
    assert!(!r.has_content(text), "label text is spoken with its control");
    assert!(r.has_content(input));
}

#[test]
fn test_script_and_head_content_excluded() {
    let mut f = Fixture::new();
    let script = f.elem(NodeId::ROOT, Tag::Script);
    let code = f.text(script, "var x = 1;");
    assert!(!f.reader().has_content(code));
}

#[test]
fn test_noembed_fallback_content_excluded() {
    let mut f = Fixture::new();
    let embed = f.elem(NodeId::ROOT, Tag::Embed);
    let noembed = f.elem(embed, Tag::Noembed);
    let fallback = f.text(noembed, "Plugin required");
    assert!(!f.reader().has_content(fallback));
}

// ------------------------------------------------------------------- tables

#[test]
fn test_single_row_table_is_layout() {
    let mut f = Fixture::new();
    let table = f.elem(NodeId::ROOT, Tag::Table);
    let tr = f.elem(table, Tag::Tr);
    for _ in 0..3 {
        let td = f.elem(tr, Tag::Td);
        f.text(td, "cell");
    }
    assert!(f.reader().is_layout_table(table));
}

#[test]
fn test_caption_makes_table_data() {
    let mut f = Fixture::new();
    let table = f.elem(NodeId::ROOT, Tag::Table);
    let caption = f.elem(table, Tag::Caption);
    f.text(caption, "Quarterly results");
    for _ in 0..2 {
        let tr = f.elem(table, Tag::Tr);
        for _ in 0..2 {
            let td = f.elem(tr, Tag::Td);
            f.text(td, "x");
        }
    }
    assert!(!f.reader().is_layout_table(table));
}

#[test]
fn test_th_and_td_mix_makes_table_data() {
    let mut f = Fixture::new();
    let table = f.elem(NodeId::ROOT, Tag::Table);
    let head_row = f.elem(table, Tag::Tr);
    f.elem(head_row, Tag::Th);
    f.elem(head_row, Tag::Th);
    let body_row = f.elem(table, Tag::Tr);
    f.elem(body_row, Tag::Td);
    f.elem(body_row, Tag::Td);
    assert!(!f.reader().is_layout_table(table));
}

#[test]
fn test_small_borderless_table_scores_as_layout() {
    let mut f = Fixture::new();
    let table = f.elem(NodeId::ROOT, Tag::Table);
    for _ in 0..2 {
        let tr = f.elem(table, Tag::Tr);
        for _ in 0..2 {
            let td = f.elem(tr, Tag::Td);
            f.text(td, "x");
        }
    }
    // No border, few rows, early in the document: three points.
    assert!(f.reader().is_layout_table(table));
}

#[test]
fn test_bordered_grid_role_table_is_data() {
    let mut f = Fixture::new();
    let table = f.elem(NodeId::ROOT, Tag::Table);
    f.tree.set_attr(table, "role", "grid");
    for _ in 0..2 {
        let tr = f.elem(table, Tag::Tr);
        f.elem(tr, Tag::Td);
        f.elem(tr, Tag::Td);
    }
    assert!(!f.reader().is_layout_table(table));
}

#[test]
fn test_rows_collected_through_row_groups() {
    let mut f = Fixture::new();
    let table = f.elem(NodeId::ROOT, Tag::Table);
    let tbody = f.elem(table, Tag::Tbody);
    let r1 = f.elem(tbody, Tag::Tr);
    let r2 = f.elem(table, Tag::Tr);
    assert_eq!(f.reader().table_rows(table), vec![r1, r2]);
}

#[test]
fn test_containing_table_respects_captions() {
    let mut f = Fixture::new();
    let table = f.elem(NodeId::ROOT, Tag::Table);
    let caption = f.elem(table, Tag::Caption);
    let caption_text = f.text(caption, "title");
    let tr = f.elem(table, Tag::Tr);
    let td = f.elem(tr, Tag::Td);

    let r = f.reader();
    assert_eq!(r.containing_table(td, false), Some(table));
    assert_eq!(r.containing_table(caption_text, false), None);
    assert_eq!(r.containing_table(caption_text, true), Some(table));
}

#[test]
fn test_find_table_node_in_list_scans_deepest_first() {
    let mut f = Fixture::new();
    let table = f.elem(NodeId::ROOT, Tag::Table);
    let caption = f.elem(table, Tag::Caption);
    let tr = f.elem(table, Tag::Tr);
    let td = f.elem(tr, Tag::Td);

    let r = f.reader();
    assert_eq!(r.find_table_node_in_list(&[table, tr, td], false), Some(table));
    // A caption below the table hides it unless captions are allowed.
    assert_eq!(r.find_table_node_in_list(&[table, caption], false), None);
    assert_eq!(r.find_table_node_in_list(&[table, caption], true), Some(table));
    assert_eq!(r.find_table_node_in_list(&[tr, td], false), None);
}

// ------------------------------------------------------------ state / value

#[test]
fn test_select_single_selection() {
    let mut f = Fixture::new();
    let select = f.elem(NodeId::ROOT, Tag::Select);
    for (i, label) in ["One", "Two", "Three"].iter().enumerate() {
        let opt = f.elem(select, Tag::OptionElt);
        f.text(opt, label);
        if i == 1 {
            f.tree.set_attr(opt, "selected", "");
        }
    }

    let r = f.reader();
    assert_eq!(r.value(select), "Two");
    assert_eq!(r.state_text(select, true), "2 of 3");
    assert_eq!(
        r.state_text(select, false),
        "2 of 3",
        "selection position is reported for ancestor readings too"
    );
}

#[test]
fn test_select_multiple_selection() {
    let mut f = Fixture::new();
    let select = f.elem(NodeId::ROOT, Tag::Select);
    for (i, label) in ["One", "Two", "Three", "Four"].iter().enumerate() {
        let opt = f.elem(select, Tag::OptionElt);
        f.text(opt, label);
        if i == 0 || i == 3 {
            f.tree.set_attr(opt, "selected", "");
        }
    }

    let r = f.reader();
    assert_eq!(r.value(select), "from One to Four");
    assert_eq!(r.state_text(select, true), "2 selected");
}

#[test]
fn test_select_options_found_inside_optgroups() {
    let mut f = Fixture::new();
    let select = f.elem(NodeId::ROOT, Tag::Select);
    let group = f.elem(select, Tag::Optgroup);
    let opt = f.elem(group, Tag::OptionElt);
    f.text(opt, "Grouped");
    f.tree.set_attr(opt, "selected", "");

    assert_eq!(f.reader().value(select), "Grouped");
}

#[test]
fn test_password_value_never_leaks() {
    let mut f = Fixture::new();
    let input = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(input, "type", "password");
    f.tree.set_attr(input, "value", "abc");

    let value = f.reader().value(input);
    assert_eq!(value, "dot dot dot ");
    assert!(!value.contains("abc"));
}

#[test]
fn test_checkbox_and_radio_states() {
    let mut f = Fixture::new();
    let cb = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(cb, "type", "checkbox");
    f.tree.set_attr(cb, "checked", "");
    let radio = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(radio, "type", "radio");

    let r = f.reader();
    assert_eq!(r.state_text(cb, true), "Checked");
    assert_eq!(r.state_text(radio, true), "Not selected");
}

#[test]
fn test_list_announces_item_count() {
    let mut f = Fixture::new();
    let ul = f.elem(NodeId::ROOT, Tag::Ul);
    for _ in 0..3 {
        f.elem(ul, Tag::Li);
    }

    let r = f.reader();
    assert_eq!(r.state_text(ul, true), "List with 3 items");
    assert_eq!(
        r.state_text(ul, false),
        "List with 3 items",
        "list summary is reported for ancestor readings too"
    );
}

#[test]
fn test_declared_set_size_wins_over_counting() {
    let mut f = Fixture::new();
    let ul = f.elem(NodeId::ROOT, Tag::Ul);
    let li = f.elem(ul, Tag::Li);
    f.elem(ul, Tag::Li);
    f.tree.set_attr(li, "aria-setsize", "10");

    assert_eq!(f.reader().list_length(ul), 10);
}

#[test]
fn test_set_position_detail_only_on_primary_node() {
    let mut f = Fixture::new();
    let item = f.elem(NodeId::ROOT, Tag::Div);
    f.tree.set_attr(item, "role", "treeitem");
    f.tree.set_attr(item, "aria-posinset", "4");
    f.tree.set_attr(item, "aria-setsize", "9");

    let r = f.reader();
    assert_eq!(r.state_text(item, true), "4 of 9");
    assert_eq!(r.state_text(item, false), "");
}

#[test]
fn test_active_descendant_supplies_value_and_state() {
    let mut f = Fixture::new();
    let listbox = f.elem(NodeId::ROOT, Tag::Div);
    f.tree.set_attr(listbox, "role", "listbox");
    f.tree.set_attr(listbox, "aria-activedescendant", "opt2");
    let opt = f.elem(listbox, Tag::Div);
    f.tree.set_attr(opt, "id", "opt2");
    f.tree.set_attr(opt, "role", "option");
    f.tree.set_attr(opt, "aria-selected", "true");
    f.text(opt, "Two");

    let r = f.reader();
    assert_eq!(r.value(listbox), "Two");
    assert_eq!(r.state_text(listbox, true), "Selected");
}

#[test]
fn test_control_value_and_state_string() {
    let mut f = Fixture::new();
    let select = f.elem(NodeId::ROOT, Tag::Select);
    f.tree.set_attr(select, "aria-label", "Size");
    for (i, label) in ["Small", "Large"].iter().enumerate() {
        let opt = f.elem(select, Tag::OptionElt);
        f.text(opt, label);
        if i == 1 {
            f.tree.set_attr(opt, "selected", "");
        }
    }

    // A plain control reports value and state without repeating the name.
    assert_eq!(
        f.reader().control_value_and_state_string(select),
        "Large 2 of 2"
    );
}

#[test]
fn test_disabled_state_reported() {
    let mut f = Fixture::new();
    let input = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(input, "disabled", "");
    let state = f.reader().state_text(input, true);
    assert!(state.contains("Disabled"), "got: {state}");
}

// -------------------------------------------------------------------- roles

#[test]
fn test_role_messages() {
    let mut f = Fixture::new();
    let button_role = f.elem(NodeId::ROOT, Tag::Div);
    f.tree.set_attr(button_role, "role", "button");
    let h2 = f.elem(NodeId::ROOT, Tag::H2);
    let checkbox = f.elem(NodeId::ROOT, Tag::Input);
    f.tree.set_attr(checkbox, "type", "checkbox");

    let r = f.reader();
    assert_eq!(r.role_text(button_role, Verbosity::Verbose), "Button");
    assert_eq!(r.role_text(h2, Verbosity::Verbose), "Heading 2");
    assert_eq!(r.role_text(h2, Verbosity::Brief), "", "brief skips headings");
    assert_eq!(r.role_text(checkbox, Verbosity::Brief), "Check box");
}

#[test]
fn test_layout_table_has_no_role() {
    let mut f = Fixture::new();
    let table = f.elem(NodeId::ROOT, Tag::Table);
    let tr = f.elem(table, Tag::Tr);
    f.elem(tr, Tag::Td);
    f.elem(tr, Tag::Td);

    assert_eq!(f.reader().role_msg(table, Verbosity::Verbose), None);
}

#[test]
fn test_named_anchor_is_not_a_link() {
    let mut f = Fixture::new();
    let anchor = f.elem(NodeId::ROOT, Tag::A);
    f.tree.set_attr(anchor, "name", "top");
    assert_eq!(f.reader().role_msg(anchor, Verbosity::Verbose), None);
}

// -------------------------------------------------------------------- links

#[test]
fn test_internal_link_detection() {
    let mut f = Fixture::new();
    let fragment = f.elem(NodeId::ROOT, Tag::A);
    let same_doc = f.elem(NodeId::ROOT, Tag::A);
    let external = f.elem(NodeId::ROOT, Tag::A);
    f.tree.set_attr(fragment, "href", "#section");
    f.tree.set_attr(same_doc, "href", "index.html#section");
    f.tree.set_attr(external, "href", "other.html#section");

    let r = f.reader().with_document_path("index.html");
    assert!(r.is_internal_link(fragment));
    assert!(r.is_internal_link(same_doc));
    assert!(!r.is_internal_link(external));

    assert_eq!(r.link_url(fragment), "Internal link");
    assert_eq!(r.link_url(external), "other.html#section");
}

#[test]
fn test_link_role_without_href_reports_unknown() {
    let mut f = Fixture::new();
    let div = f.elem(NodeId::ROOT, Tag::Div);
    f.tree.set_attr(div, "role", "link");
    assert_eq!(f.reader().link_url(div), "Unknown link");
}

// ---------------------------------------------------------------- traversal

#[test]
fn test_leaf_traversal_round_trip() {
    let mut f = Fixture::new();
    let body = f.elem(NodeId::ROOT, Tag::Body);
    let p1 = f.elem(body, Tag::P);
    let t1 = f.text(p1, "one");
    let p2 = f.elem(body, Tag::P);
    let t2 = f.text(p2, "two");
    let p3 = f.elem(body, Tag::P);
    let t3 = f.text(p3, "three");

    let r = f.reader();
    assert_eq!(r.directed_next_leaf_node(t1, false), Some(t2));
    assert_eq!(r.directed_next_leaf_node(t2, false), Some(t3));
    assert_eq!(r.previous_leaf_node(t2), Some(t1));
    assert_eq!(r.directed_next_leaf_node(t3, false), None);
    assert_eq!(r.previous_leaf_node(t1), None);
}

#[test]
fn test_first_leaf_skips_empty_structure() {
    let mut f = Fixture::new();
    let body = f.elem(NodeId::ROOT, Tag::Body);
    let empty = f.elem(body, Tag::Div);
    f.elem(empty, Tag::Div);
    let p = f.elem(body, Tag::P);
    let t = f.text(p, "content");

    assert_eq!(f.reader().first_leaf_node(), Some(t));
}

#[test]
fn test_directed_find_next_node_within_ancestor() {
    let mut f = Fixture::new();
    let body = f.elem(NodeId::ROOT, Tag::Body);
    let d1 = f.elem(body, Tag::Div);
    let h_before = f.elem(d1, Tag::H2);
    f.text(h_before, "before");
    let d2 = f.elem(body, Tag::Div);
    let h_after = f.elem(d2, Tag::H2);
    f.text(h_after, "after");

    let r = f.reader();
    let pred = |n: NodeId| r.tree().tag(n) == Some(Tag::H2);
    assert_eq!(
        r.directed_find_next_node(h_before, body, false, &pred, false, false),
        Some(h_after)
    );
    assert_eq!(
        r.directed_find_next_node(h_after, body, false, &pred, false, false),
        None
    );
}

#[test]
fn test_unique_ancestors_reports_newly_entered_chain() {
    let mut f = Fixture::new();
    let body = f.elem(NodeId::ROOT, Tag::Body);
    let d1 = f.elem(body, Tag::Div);
    let t1 = f.text(d1, "a");
    let d2 = f.elem(body, Tag::Div);
    let inner = f.elem(d2, Tag::P);
    let t2 = f.text(inner, "b");

    let r = f.reader();
    assert_eq!(r.unique_ancestors(t1, t2), vec![d2, inner, t2]);
}

// --------------------------------------------------------------- activation

struct Recorder {
    consume: bool,
    fail: bool,
    seen: Vec<NodeId>,
}

impl ActivationHandler for Recorder {
    fn on_activate(&mut self, target: NodeId) -> Result<bool, NavError> {
        self.seen.push(target);
        if self.fail {
            return Err(NavError::Activation("handler exploded".to_string()));
        }
        Ok(!self.consume)
    }
}

#[test]
fn test_activation_routing() {
    let mut f = Fixture::new();
    let button = f.elem(NodeId::ROOT, Tag::Button);
    let r = f.reader();

    let mut passthrough = Recorder { consume: false, fail: false, seen: vec![] };
    assert_eq!(r.activate(button, &mut passthrough), Activation::Dispatch(button));

    let mut consumer = Recorder { consume: true, fail: false, seen: vec![] };
    assert_eq!(r.activate(button, &mut consumer), Activation::Consumed);
    assert_eq!(consumer.seen, vec![button]);
}

#[test]
fn test_activation_handler_failure_falls_back_to_dispatch() {
    let mut f = Fixture::new();
    let button = f.elem(NodeId::ROOT, Tag::Button);
    let mut failing = Recorder { consume: true, fail: true, seen: vec![] };
    assert_eq!(
        f.reader().activate(button, &mut failing),
        Activation::Dispatch(button)
    );
}

#[test]
fn test_activation_targets_active_descendant() {
    let mut f = Fixture::new();
    let listbox = f.elem(NodeId::ROOT, Tag::Div);
    f.tree.set_attr(listbox, "role", "listbox");
    f.tree.set_attr(listbox, "aria-activedescendant", "pick");
    let opt = f.elem(listbox, Tag::Div);
    f.tree.set_attr(opt, "id", "pick");

    let mut handler = Recorder { consume: false, fail: false, seen: vec![] };
    assert_eq!(
        f.reader().activate(listbox, &mut handler),
        Activation::Dispatch(opt)
    );
    assert_eq!(handler.seen, vec![opt]);
}
