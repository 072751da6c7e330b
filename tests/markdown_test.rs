//! Integration tests for the markdown pipeline.
//!
//! Parses the bundled blog post bodies end to end and checks the rendered
//! HTML for the constructs the restricted subset supports.

use foliogen::{Block, BlogStore, Highlighter};

/// Tests that every builtin post body parses into at least one block.
#[test]
fn test_builtin_posts_parse() {
    // Arrange
    let store = BlogStore::builtin();

    // Act & Assert
    for listed in store.posts().expect("Builtin listing cannot fail") {
        let full = store
            .post_by_slug(&listed.slug)
            .expect("Builtin post should exist");
        let blocks = foliogen::parse(&full.content);
        assert!(
            !blocks.is_empty(),
            "Post {} should parse into blocks",
            full.slug
        );
    }
}

/// Tests a document mixing every supported block type.
#[test]
fn test_mixed_document_renders() {
    // Arrange
    let source = "\
## Gateway setup

Use **mutual TLS** with `valcred` objects.

### Steps

1. Create the crypto profile
2. Attach it to the handler

- No client cert
- Expired cert

```xml
<valcred name=\"partner\"/>
```

| Error | Meaning |
| --- | --- |
| 401 | Unauthorized |";
    let highlighter = Highlighter::new();

    // Act
    let blocks = foliogen::parse(source);
    let html = foliogen::render_blocks(&blocks, &highlighter).into_string();

    // Assert
    assert_eq!(blocks.len(), 7, "One block per construct: {:?}", blocks);
    assert!(html.contains("<h2>Gateway setup</h2>"));
    assert!(html.contains("<h3>Steps</h3>"));
    assert!(html.contains("<strong>mutual TLS</strong>"));
    assert!(html.contains("<code>valcred</code>"));
    assert!(html.contains("<ol>"));
    assert!(html.contains("<ul>"));
    assert!(html.contains("class=\"language-xml\""));
    assert!(html.contains("<th>Error</th>"));
    assert!(html.contains("<td>401</td>"));
}

/// Tests that an unterminated code fence consumes the rest of the input.
#[test]
fn test_unterminated_fence_runs_to_end() {
    // Arrange
    let source = "Intro paragraph.\n\n```sh\necho one\necho two";

    // Act
    let blocks = foliogen::parse(source);

    // Assert
    assert_eq!(blocks.len(), 2);
    match &blocks[1] {
        Block::CodeBlock { language, code } => {
            assert_eq!(language, "sh");
            assert!(code.contains("echo two"));
        }
        other => panic!("Expected code block, got {:?}", other),
    }
}

/// Tests that raw HTML in post text is escaped in the output.
#[test]
fn test_rendered_output_escapes_html() {
    // Arrange
    let source = "Never trust <script>alert(1)</script> input.";
    let highlighter = Highlighter::new();

    // Act
    let blocks = foliogen::parse(source);
    let html = foliogen::render_blocks(&blocks, &highlighter).into_string();

    // Assert
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}
