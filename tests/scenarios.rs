use anyhow::Result;
use gatherbeam::testing::*;
use gatherbeam::*;

#[test]
fn fixed_window_of_two() -> Result<()> {
    let out = run(FixedWindow::new(2)?, vec![1, 2, 3, 4, 5])?;
    assert_collections_equal(&out, &[vec![1, 2], vec![3, 4], vec![5]]);
    Ok(())
}

#[test]
fn sliding_window_of_two() -> Result<()> {
    let out = run(SlidingWindow::new(2)?, vec![1, 2, 3, 4, 5])?;
    assert_collections_equal(&out, &[vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]]);
    Ok(())
}

#[test]
fn sliding_window_average() -> Result<()> {
    let averages = SlidingWindow::new(3)?.and_then(Map::new(|w: Vec<i32>| {
        f64::from(w.iter().sum::<i32>()) / w.len() as f64
    }));
    let out = run(&averages, vec![1, 2, 3, 4, 5])?;
    assert_collections_equal(&out, &[2.0, 3.0, 4.0]);
    Ok(())
}

#[test]
fn sliding_window_peaks() -> Result<()> {
    let local_max = SlidingWindow::new(3)?.and_then(Map::new(|w: Vec<i32>| {
        w.into_iter().max().unwrap_or(i32::MIN)
    }));
    let maxima = run(&local_max, vec![1, 3, 2, 5, 4, 6, 2])?;
    assert_collections_equal(&maxima, &[3, 5, 5, 6, 6]);

    // Every other window starts two elements further on.
    let peaks: Vec<i32> = maxima.into_iter().step_by(2).collect();
    assert_collections_equal(&peaks, &[3, 5, 6]);
    Ok(())
}

#[test]
fn scan_running_sum() -> Result<()> {
    let out = run(Scan::new(0, |a: i32, x: i32| a + x), vec![1, 2, 3, 4])?;
    assert_collections_equal(&out, &[1, 3, 6, 10]);
    Ok(())
}

#[test]
fn scan_string_concatenation() -> Result<()> {
    let sentence = Scan::new(String::new(), |acc: String, word: &str| {
        if acc.is_empty() {
            word.to_string()
        } else {
            format!("{acc} {word}")
        }
    });
    let out = run(&sentence, ["Hello", "World", "from", "Gatherers"])?;
    assert_collections_equal(
        &out,
        &[
            "Hello".to_string(),
            "Hello World".to_string(),
            "Hello World from".to_string(),
            "Hello World from Gatherers".to_string(),
        ],
    );
    Ok(())
}

#[test]
fn fold_sum() -> Result<()> {
    let out = run(Fold::new(0, |a: i32, x: i32| a + x), vec![1, 2, 3, 4])?;
    assert_collections_equal(&out, &[10]);
    Ok(())
}

#[test]
fn fold_max() -> Result<()> {
    let out = run(Fold::new(i32::MIN, i32::max), vec![5, 12, 8, 42, 3, 15])?;
    assert_collections_equal(&out, &[42]);
    Ok(())
}

#[test]
fn consecutive_groups() -> Result<()> {
    let out = run(ConsecutiveGroup, vec![1, 1, 2, 3, 3, 3, 1, 2, 2])?;
    assert_collections_equal(
        &out,
        &[vec![1, 1], vec![2], vec![3, 3, 3], vec![1], vec![2, 2]],
    );
    Ok(())
}

#[test]
fn skip_one_take_two() -> Result<()> {
    let out = run(SkipTake::new(1, 2)?, 1..=9)?;
    assert_collections_equal(&out, &[2, 3, 5, 6, 8, 9]);
    Ok(())
}

#[test]
fn skip_two_take_three() -> Result<()> {
    let out = run(SkipTake::new(2, 3)?, 1..=10)?;
    assert_collections_equal(&out, &[3, 4, 5, 8, 9, 10]);
    Ok(())
}

#[test]
fn batches_above_threshold() -> Result<()> {
    let heavy = FixedWindow::new(3)?.and_then(Filter::new(|b: &Vec<i32>| b.iter().sum::<i32>() > 10));
    let out = run(&heavy, 1..=9)?;
    assert_collections_equal(&out, &[vec![4, 5, 6], vec![7, 8, 9]]);
    Ok(())
}

#[test]
fn distinct_values() -> Result<()> {
    let out = run(Distinct, vec![1, 1, 2, 3, 3, 3, 4, 5, 5])?;
    assert_collections_equal(&out, &[1, 2, 3, 4, 5]);
    Ok(())
}
