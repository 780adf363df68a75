use employee_bst::{Error, Order, Record, Tree};

/// Renders a walk and strips the indentation so only the visit order is compared.
fn rendered(tree: &Tree, order: Order) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    tree.print(order, &mut lines);
    lines.iter().map(|line| line.trim_start().to_owned()).collect()
}

fn staff() -> Tree {
    let mut tree = Tree::new();
    tree.insert(Record::new(5, "Ana")).unwrap();
    tree.insert(Record::new(3, "Bob")).unwrap();
    tree.insert(Record::new(8, "Cid")).unwrap();
    tree
}

#[test]
fn duplicate_then_delete_root() {
    let mut tree = staff();

    assert_eq!(
        tree.insert(Record::new(3, "Dup")),
        Err(Error::DuplicateKey(3))
    );
    assert_eq!(
        rendered(&tree, Order::In),
        [
            "Empleado ID: 3, Nombre: Bob",
            "Empleado ID: 5, Nombre: Ana",
            "Empleado ID: 8, Nombre: Cid",
        ]
    );

    let deleted = tree.delete(5).unwrap();
    assert_eq!(deleted.name(), "Ana");

    // 8 was the successor and now sits at the root.
    assert_eq!(
        rendered(&tree, Order::Pre),
        ["Empleado ID: 8, Nombre: Cid", "Empleado ID: 3, Nombre: Bob"]
    );
    assert_eq!(
        rendered(&tree, Order::In),
        ["Empleado ID: 3, Nombre: Bob", "Empleado ID: 8, Nombre: Cid"]
    );
    assert!(tree.validate());
}

#[test]
fn leaf_and_empty_checks() {
    let mut tree = Tree::new();
    assert!(tree.is_empty());

    tree.insert(Record::new(1, "Ana")).unwrap();
    assert!(tree.is_leaf());

    tree.insert(Record::new(2, "Bob")).unwrap();
    assert!(!tree.is_leaf());

    tree.delete(1);
    tree.delete(2);
    assert!(tree.is_empty());
    assert!(!tree.is_leaf());
}

#[test]
fn deleting_absent_id_keeps_output_identical() {
    let mut tree = staff();
    let before: Vec<_> = [Order::Pre, Order::In, Order::Post]
        .into_iter()
        .map(|order| rendered(&tree, order))
        .collect();

    assert!(tree.delete(42).is_none());

    let after: Vec<_> = [Order::Pre, Order::In, Order::Post]
        .into_iter()
        .map(|order| rendered(&tree, order))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn records_survive_until_deleted() {
    let mut tree = Tree::new();
    let ids = [50, 30, 70, 20, 40, 60, 80, 35, 45, 65];
    for id in ids {
        tree.insert(Record::new(id, format!("e{}", id))).unwrap();
    }

    for (deleted, id) in ids.iter().enumerate() {
        assert_eq!(tree.get(*id).map(Record::id), Some(*id));
        assert_eq!(tree.delete(*id).map(|r| r.id()), Some(*id));
        assert!(!tree.exists(*id));
        assert!(tree.validate());

        let remaining: Vec<_> = tree.iter().map(Record::id).collect();
        assert_eq!(remaining.len(), ids.len() - deleted - 1);
        assert!(remaining.windows(2).all(|pair| pair[0] < pair[1]));
    }
    assert!(tree.is_empty());
}
