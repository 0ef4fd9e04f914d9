use patricia::{Color, PatriciaTrie};

#[test]
fn test_car_cat_dog_scenario() {
    let mut trie = PatriciaTrie::new();
    assert!(trie.add("car"));
    assert!(trie.add("cat"));
    assert!(trie.add("dog"));
    assert_eq!(trie.size(), 3);
    assert!(trie.contains("car"));
    assert!(!trie.contains("ca"));

    assert!(trie.remove("cat"));
    assert_eq!(trie.size(), 2);
    assert!(!trie.contains("cat"));
    assert!(trie.contains("car"));

    // the "ca" fork is gone, "car" hangs directly off the root
    let car = trie.node("car").unwrap();
    assert_eq!(car.label(), "car");
    assert!(car.parent().unwrap().is_root());
    assert_eq!(car.color(), Color::Terminal);
    assert!(trie.node("ca").is_none());
    trie.validate().unwrap();
}

#[test]
fn test_duplicate_insert_is_idempotent() {
    let mut trie = PatriciaTrie::new();
    for key in ["", "a", "abc", "b"] {
        let size = trie.size();
        assert!(trie.add(key));
        let rendered = trie.to_string();
        assert!(!trie.add(key));
        assert_eq!(trie.size(), size + 1);
        assert_eq!(trie.to_string(), rendered);
        assert!(trie.contains(key));
    }
}

#[test]
fn test_remove_restores_previous_shape() {
    let base = ["romane", "romanus", "romulus", "rubens", "ruber", "rubicon", "rubicundus"];
    let mut trie: PatriciaTrie = base.into_iter().collect();
    let before = trie.to_string();
    let nodes = trie.node_count();

    for extra in ["rom", "r", "roman", "rubiconx", "s", "romanesque", "rubi"] {
        assert!(trie.add(extra), "{extra} should be new");
        trie.validate().unwrap();
        assert!(trie.remove(extra), "{extra} should be removable");
        trie.validate().unwrap();
        assert_eq!(trie.size(), base.len());
        assert_eq!(trie.node_count(), nodes);
        // Compare shapes independent of sibling order
        assert_eq!(format!("{trie:#}"), {
            let fresh: PatriciaTrie = base.into_iter().collect();
            format!("{fresh:#}")
        });
    }
    assert!(before.contains("(om) [branch] rom"));
}

#[test]
fn test_membership_excludes_prefixes_and_suffixes() {
    let words = ["test", "toaster", "toasting", "slow", "slowly"];
    let trie: PatriciaTrie = words.into_iter().collect();

    for word in words {
        assert!(trie.contains(word));
    }
    for absent in ["", "t", "te", "toast", "toasters", "low", "slo", "ly", "slowl", "x"] {
        assert!(!trie.contains(absent), "{absent} must not be a member");
    }
}

#[test]
fn test_remove_absent_key_changes_nothing() {
    let mut trie: PatriciaTrie = ["alpha", "alpine", "beta"].into_iter().collect();
    let rendered = trie.to_string();

    for absent in ["alp", "alphas", "gamma", "", "b"] {
        assert!(!trie.remove(absent));
    }
    assert!(trie.remove("beta"));
    assert!(!trie.remove("beta"));

    assert_eq!(trie.size(), 2);
    assert_ne!(trie.to_string(), rendered);
    trie.validate().unwrap();
}

#[test]
fn test_drain_to_empty() {
    let words = ["a", "ab", "abc", "abd", "b", "ba", "bab", "c"];
    let mut trie: PatriciaTrie = words.into_iter().collect();

    for (removed, word) in words.iter().enumerate() {
        assert!(trie.remove(word));
        trie.validate().unwrap();
        assert_eq!(trie.size(), words.len() - removed - 1);
        for rest in &words[removed + 1..] {
            assert!(trie.contains(rest));
        }
    }
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
    assert_eq!(trie.to_string(), "└── [branch]\n");
}

#[test]
fn test_unicode_keys() {
    let mut trie = PatriciaTrie::new();
    assert!(trie.add("naïve"));
    assert!(trie.add("naïf"));
    assert!(trie.add("日本語"));
    assert!(trie.add("日本"));

    assert_eq!(trie.node("naï").map(|n| n.label()), Some("naï".to_string()));
    assert_eq!(trie.node("日本").map(|n| n.color()), Some(Color::Terminal));
    assert!(!trie.contains("nai"));
    assert!(trie.remove("naïf"));
    assert_eq!(trie.node("naïve").map(|n| n.label()), Some("naïve".to_string()));
    trie.validate().unwrap();
}

#[test]
fn test_iteration_matches_contents() {
    let mut trie: PatriciaTrie = ["one", "two", "three", "thirty", "on"].into_iter().collect();
    trie.remove("two");

    let mut keys: Vec<String> = trie.iter().collect();
    keys.sort();
    assert_eq!(keys, vec!["on", "one", "thirty", "three"]);
    assert_eq!(format!("{trie:?}").matches('"').count(), 8);
}
