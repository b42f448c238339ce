use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use jast_syntax::SyntaxKind::{self, *};
use jast_syntax::ast::{
    AmbiguousName, ArrayDimensions, AstNode as _, AtLeastOneChild as _, Literal, MethodCall,
    TypeNode as _,
};
use jast_syntax::{
    NodeId, NodeStream as _, Primitive, SyntaxNode, SyntaxSet, SyntaxTree, TreeBuilder, TypeInfo,
    WalkEvent,
};
use text_size::TextRange;

fn leaf(
    builder: &mut TreeBuilder,
    parent: NodeId,
    kind: SyntaxKind,
    image: &str,
    start: u32,
    end: u32,
) -> NodeId {
    let node = builder.create_node(kind);
    builder.append_child(parent, node);
    builder.set_image(node, image);
    builder.extend_range(node, TextRange::new(start.into(), end.into()));
    builder.close(node);
    node
}

/// `a.m(b, 1)`
fn call_tree() -> SyntaxTree {
    let mut builder = TreeBuilder::new("a.m(b, 1)");
    let call = builder.create_node(METHOD_CALL);
    builder.set_image(call, "m");
    leaf(&mut builder, call, AMBIGUOUS_NAME, "a", 0, 1);

    let args = builder.create_node(ARGUMENT_LIST);
    builder.append_child(call, args);
    builder.extend_range(args, TextRange::new(3.into(), 4.into()));
    leaf(&mut builder, args, AMBIGUOUS_NAME, "b", 4, 5);
    leaf(&mut builder, args, LITERAL, "1", 7, 8);
    builder.extend_range(args, TextRange::new(8.into(), 9.into()));
    builder.close(args);

    builder.close(call);
    builder.finish(call)
}

fn kinds<'a>(nodes: impl Iterator<Item = SyntaxNode<'a>>) -> Vec<SyntaxKind> {
    nodes.map(SyntaxNode::kind).collect()
}

fn images<'a>(nodes: impl Iterator<Item = SyntaxNode<'a>>) -> Vec<&'a str> {
    nodes.filter_map(SyntaxNode::image).collect()
}

#[test]
fn relationship_streams() {
    let tree = call_tree();
    let root = tree.root();
    let args = root.child_at(1);
    let b = args.child_at(0);
    let one = args.child_at(1);

    assert_eq!(root.text_range(), TextRange::new(0.into(), 9.into()));
    assert_eq!(kinds(root.children()), [AMBIGUOUS_NAME, ARGUMENT_LIST]);
    assert_eq!(images(root.descendants()), ["a", "b", "1"]);
    assert_eq!(images(root.descendants_or_self()), ["m", "a", "b", "1"]);
    assert_eq!(kinds(one.ancestors()), [ARGUMENT_LIST, METHOD_CALL]);
    assert_eq!(kinds(one.ancestors_or_self()), [LITERAL, ARGUMENT_LIST, METHOD_CALL]);
    assert_eq!(images(b.following_siblings()), ["1"]);
    assert_eq!(images(one.preceding_siblings()), ["b"]);
    assert_eq!(b.preceding_siblings().count(), 0);
    assert_eq!(root.following_siblings().count(), 0);
    assert_eq!(one.text(), "1");
    assert_eq!(args.text(), "(b, 1)");
}

#[test]
fn node_stream_combinators() {
    let tree = call_tree();
    let root = tree.root();

    let names: Vec<_> =
        root.descendants().filter_is::<AmbiguousName<'_>>().map(|it| it.name()).collect();
    assert_eq!(names, ["a", "b"]);

    let values = SyntaxSet::new([LITERAL, ARGUMENT_LIST]);
    assert_eq!(kinds(root.descendants().of_kinds(values)), [ARGUMENT_LIST, LITERAL]);
    assert_eq!(images(root.children().children_of_kind(AMBIGUOUS_NAME)), ["b"]);
    assert_eq!(images(root.children().descendants()), ["b", "1"]);
    assert_eq!(kinds(root.descendants().of_kind(LITERAL).parents()), [ARGUMENT_LIST]);
    assert_eq!(root.descendants().first_of_kind(LITERAL).and_then(SyntaxNode::image), Some("1"));
    assert!(root.children().first_is::<Literal<'_>>().is_none());
    assert!(MethodCall::cast(root).is_some());
}

#[test]
fn preorder_can_skip_subtrees() {
    let tree = call_tree();
    let mut entered = Vec::new();
    let mut left = 0;

    let mut preorder = tree.root().preorder();
    while let Some(event) = preorder.next() {
        match event {
            WalkEvent::Enter(node) => {
                entered.push(node.kind());
                if node.kind() == ARGUMENT_LIST {
                    preorder.skip_subtree();
                }
            }
            WalkEvent::Leave(_) => left += 1,
        }
    }

    assert_eq!(entered, [METHOD_CALL, AMBIGUOUS_NAME, ARGUMENT_LIST]);
    assert_eq!(left, 2);
}

fn resolve(node: SyntaxNode<'_>) -> TypeInfo {
    match node.kind() {
        LITERAL => TypeInfo::Primitive(Primitive::Int),
        AMBIGUOUS_NAME => TypeInfo::Unknown,
        _ => TypeInfo::class("java.lang.Object"),
    }
}

#[test]
fn type_is_computed_on_first_access() {
    let tree = call_tree();
    let calls = AtomicUsize::new(0);
    let resolver = |node: SyntaxNode<'_>| {
        calls.fetch_add(1, Ordering::Relaxed);
        resolve(node)
    };

    let literal = tree.root().descendants().find_map(Literal::cast).unwrap();
    assert_eq!(literal.cached_type(), None);
    assert_eq!(literal.type_info(&resolver), &TypeInfo::Primitive(Primitive::Int));
    assert_eq!(literal.type_info(&resolver), &TypeInfo::Primitive(Primitive::Int));
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(literal.cached_type(), Some(&TypeInfo::Primitive(Primitive::Int)));
    assert!(!literal.set_type_info(TypeInfo::Null));
}

#[test]
fn unknown_is_cached_like_any_type() {
    let tree = call_tree();
    let calls = AtomicUsize::new(0);
    let resolver = |node: SyntaxNode<'_>| {
        calls.fetch_add(1, Ordering::Relaxed);
        resolve(node)
    };

    let name = tree.root().descendants().find_map(AmbiguousName::cast).unwrap();
    assert!(name.type_info(&resolver).is_unknown());
    assert!(name.type_info(&resolver).is_unknown());
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn stored_type_wins_over_resolution() {
    let tree = call_tree();
    let root = tree.root();

    assert!(root.set_type_info(TypeInfo::class("java.lang.String")));
    assert!(!root.set_type_info(TypeInfo::Void));

    let resolver = |_: SyntaxNode<'_>| -> TypeInfo { panic!("already typed") };
    assert_eq!(root.type_info(&resolver).to_string(), "java.lang.String");
}

#[test]
fn concurrent_readers_agree() {
    let tree = call_tree();
    let calls = AtomicUsize::new(0);
    let resolver = |node: SyntaxNode<'_>| {
        calls.fetch_add(1, Ordering::Relaxed);
        resolve(node)
    };

    let (tree, resolver) = (&tree, &resolver);
    let results: Vec<Vec<&TypeInfo>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    tree.root()
                        .descendants_or_self()
                        .map(|node| node.type_info(resolver))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    let first = &results[0];
    assert_eq!(first.len(), tree.len());
    for result in &results[1..] {
        assert!(result.iter().zip(first).all(|(a, b)| std::ptr::eq(*a, *b)));
    }
    assert!(calls.load(Ordering::Relaxed) >= tree.len());
}

#[test]
#[should_panic(expected = "must have at least one child")]
fn empty_dimensions_have_no_first_child() {
    let mut builder = TreeBuilder::new("");
    let dims = builder.create_node(ARRAY_DIMENSIONS);
    builder.close(dims);
    let tree = builder.finish(dims);

    ArrayDimensions::cast(tree.root()).unwrap().first_child();
}
