use datatables::SelectionState;

fn state(flags: &[bool]) -> SelectionState {
    let mut s = SelectionState::new(flags.len());
    for (i, &checked) in flags.iter().enumerate() {
        if checked {
            s.toggle_one(i);
        }
    }
    s
}

#[test]
fn test_new_state_is_unchecked() {
    let s = SelectionState::new(4);
    assert_eq!(s.len(), 4);
    assert_eq!(s.as_slice(), &[false; 4]);
    assert!(s.checked_indices().is_empty());
}

#[test]
fn test_resize_to_other_length_clears_everything() {
    for (from, to) in [(5, 2), (2, 5), (3, 0), (0, 3)] {
        let mut s = state(&vec![true; from]);
        assert!(s.resize(to));
        assert_eq!(s.as_slice(), vec![false; to].as_slice());
    }
}

#[test]
fn test_resize_to_same_length_keeps_flags() {
    let mut s = state(&[true, false, true]);
    assert!(!s.resize(3));
    assert_eq!(s.as_slice(), &[true, false, true]);
}

#[test]
fn test_shrink_resets_instead_of_truncating() {
    let mut s = state(&[true, true, false, false, false]);
    s.resize(2);
    assert_eq!(s.as_slice(), &[false, false]);
}

#[test]
fn test_is_all_checked() {
    assert!(!SelectionState::new(0).is_all_checked());
    assert!(!state(&[true, false]).is_all_checked());
    assert!(!state(&[false, false]).is_all_checked());
    assert!(state(&[true]).is_all_checked());
    assert!(state(&[true, true, true]).is_all_checked());
}

#[test]
fn test_toggle_all_from_partial_selects_all() {
    let mut s = state(&[true, false, true]);
    s.toggle_all();
    assert_eq!(s.as_slice(), &[true, true, true]);
    s.toggle_all();
    assert_eq!(s.as_slice(), &[false, false, false]);
}

#[test]
fn test_toggle_all_twice_restores_uniform_states() {
    for flags in [vec![false; 3], vec![true; 3], vec![]] {
        let mut s = state(&flags);
        s.toggle_all();
        s.toggle_all();
        assert_eq!(s.as_slice(), flags.as_slice());
    }
}

#[test]
fn test_toggle_all_on_empty_is_noop() {
    let mut s = SelectionState::new(0);
    s.toggle_all();
    assert!(s.is_empty());
    assert!(!s.is_all_checked());
}

#[test]
fn test_toggle_one_changes_only_its_index() {
    let initial = [true, false, true, false];
    for i in 0..initial.len() {
        let mut s = state(&initial);
        assert!(s.toggle_one(i));
        for (j, &before) in initial.iter().enumerate() {
            if j == i {
                assert_eq!(s.is_checked(j), !before);
            } else {
                assert_eq!(s.is_checked(j), before);
            }
        }
    }
}

#[test]
fn test_toggle_one_out_of_range() {
    let mut s = state(&[false, true]);
    assert!(!s.toggle_one(2));
    assert_eq!(s.as_slice(), &[false, true]);
    assert!(!s.is_checked(7));
}

#[test]
fn test_three_row_walkthrough() {
    let mut s = SelectionState::new(3);
    s.toggle_one(1);
    assert_eq!(s.as_slice(), &[false, true, false]);
    assert!(!s.is_all_checked());

    s.toggle_one(0);
    s.toggle_one(2);
    assert!(s.is_all_checked());
    assert_eq!(s.checked_indices(), vec![0, 1, 2]);

    s.toggle_all();
    assert_eq!(s.as_slice(), &[false, false, false]);
}
