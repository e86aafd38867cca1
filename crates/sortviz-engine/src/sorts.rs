#![forbid(unsafe_code)]

//! The three animated sorting algorithms.
//!
//! Each algorithm mutates an [`ArrayState`] in place and reports progress
//! through a [`StepSink`]. A "step" is the unit of animation: the sink is
//! invoked at every point the visualization should redraw, and the sink
//! (not the algorithm) decides what redrawing and pacing mean.
//!
//! Step granularity differs per algorithm and is part of the contract:
//!
//! - Bubble steps after **every inner-loop comparison**, swap or not, so
//!   the animation shows the scan itself: exactly `n(n-1)/2` steps.
//! - Merge steps after **every element written back** during a merge, plus
//!   once more after each completed merge call.
//! - Quick steps after **every in-partition swap** (the final pivot
//!   placement swap is silent) plus once after each recursive call
//!   completes, base cases included. No per-comparison steps.
//!
//! Arrays of length 0 or 1 terminate immediately with zero mutations and
//! zero steps.

use sortviz_core::{ArrayState, SortKind};

/// Receiver of step notifications.
///
/// Called with the array immediately after the mutation (or call
/// completion) the step reports. Implementations must not hold on to the
/// reference; take a [`snapshot`](ArrayState::snapshot) if the state is
/// needed later.
pub trait StepSink {
    /// A mutation occurred; render the current state now.
    fn step(&mut self, array: &ArrayState);
}

/// Adapter turning a closure into a [`StepSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(&ArrayState)> StepSink for FnSink<F> {
    fn step(&mut self, array: &ArrayState) {
        (self.0)(array)
    }
}

/// Sink that ignores every step. Runs any algorithm at full speed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl StepSink for NullSink {
    fn step(&mut self, _array: &ArrayState) {}
}

/// Run the requested algorithm to completion.
pub fn run(kind: SortKind, array: &mut ArrayState, sink: &mut impl StepSink) {
    match kind {
        SortKind::Bubble => bubble_sort(array, sink),
        SortKind::Merge => merge_sort(array, sink),
        SortKind::Quick => quick_sort(array, sink),
    }
}

/// Classic adjacent-pair bubble sort.
///
/// Steps after every inner iteration so comparisons without a swap are
/// animated too.
pub fn bubble_sort(array: &mut ArrayState, sink: &mut impl StepSink) {
    let n = array.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            if array.get(j) > array.get(j + 1) {
                array.swap(j, j + 1);
            }
            sink.step(array);
        }
    }
}

/// Top-down merge sort with an auxiliary buffer per merge call.
pub fn merge_sort(array: &mut ArrayState, sink: &mut impl StepSink) {
    let n = array.len();
    if n < 2 {
        return;
    }
    merge_sort_range(array, 0, n - 1, sink);
}

/// Sort the inclusive subrange `[left, right]`, stepping once after the
/// merge for this call completes.
fn merge_sort_range(array: &mut ArrayState, left: usize, right: usize, sink: &mut impl StepSink) {
    if left < right {
        let mid = (left + right) / 2;
        merge_sort_range(array, left, mid, sink);
        merge_sort_range(array, mid + 1, right, sink);
        merge(array, left, mid, right, sink);
        sink.step(array);
    }
}

/// Merge two sorted halves `[left, mid]` and `[mid+1, right]`.
///
/// The temp buffer is a copy of the subrange, discarded when the call
/// returns. Writes go back one element at a time, stepping after each, and
/// the left cursor wins ties so equal elements keep their relative order.
fn merge(array: &mut ArrayState, left: usize, mid: usize, right: usize, sink: &mut impl StepSink) {
    let temp: Vec<i32> = array.as_slice()[left..=right].to_vec();
    let split = mid - left; // last index of the left half within temp
    let mut i = 0;
    let mut j = split + 1;
    let mut k = left;

    while i <= split && j <= right - left {
        let value = if temp[i] <= temp[j] {
            i += 1;
            temp[i - 1]
        } else {
            j += 1;
            temp[j - 1]
        };
        array.write_range(k, &[value]);
        k += 1;
        sink.step(array);
    }
    while i <= split {
        array.write_range(k, &[temp[i]]);
        i += 1;
        k += 1;
        sink.step(array);
    }
    while j <= right - left {
        array.write_range(k, &[temp[j]]);
        j += 1;
        k += 1;
        sink.step(array);
    }
}

/// One pending unit of quicksort work.
///
/// Quicksort runs on an explicit stack rather than native recursion:
/// with the pivot fixed at the last element, an already-sorted input
/// drives the call depth to `O(n)`, which for large arrays is a real
/// stack-overflow hazard. `Emit` markers reproduce the post-order step
/// that fires when a call (base cases included) completes.
enum QuickFrame {
    Call { low: isize, high: isize },
    Emit,
}

/// Iterative quicksort with Lomuto partitioning, pivot = last element.
pub fn quick_sort(array: &mut ArrayState, sink: &mut impl StepSink) {
    let n = array.len();
    if n < 2 {
        return;
    }
    let mut stack = vec![QuickFrame::Call {
        low: 0,
        high: (n - 1) as isize,
    }];
    while let Some(frame) = stack.pop() {
        match frame {
            QuickFrame::Call { low, high } => {
                // The end-of-call step fires after both subcalls finish,
                // so its marker goes under them on the stack.
                stack.push(QuickFrame::Emit);
                if low < high {
                    let p = partition(array, low as usize, high as usize, sink) as isize;
                    stack.push(QuickFrame::Call { low: p + 1, high });
                    stack.push(QuickFrame::Call { low, high: p - 1 });
                }
            }
            QuickFrame::Emit => sink.step(array),
        }
    }
}

/// Lomuto partition of the inclusive subrange `[low, high]`.
///
/// Steps after every swap inside the scan; the final swap that places the
/// pivot is not animated.
fn partition(array: &mut ArrayState, low: usize, high: usize, sink: &mut impl StepSink) -> usize {
    let pivot = array.get(high);
    let mut i = low;
    for j in low..high {
        if array.get(j) < pivot {
            array.swap(i, j);
            sink.step(array);
            i += 1;
        }
    }
    array.swap(i, high);
    i
}
