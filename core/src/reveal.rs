/// One-way "entered the viewport" flags for cards and panels.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    ratio: f64,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(ratio: f64, count: usize) -> Self {
        Self {
            ratio,
            revealed: vec![false; count],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|flag| *flag)
    }

    /// Marks elements whose top crossed the reveal line and returns the
    /// indices that flipped on this call.
    pub fn update(&mut self, tops: &[f64], viewport_height: f64) -> Vec<usize> {
        let line = viewport_height * self.ratio;
        let mut newly = Vec::new();
        for (index, top) in tops.iter().enumerate() {
            let Some(flag) = self.revealed.get_mut(index) else {
                break;
            };
            if !*flag && *top <= line {
                *flag = true;
                newly.push(index);
            }
        }
        newly
    }

    pub fn reveal_all(&mut self) -> Vec<usize> {
        let newly = self
            .revealed
            .iter()
            .enumerate()
            .filter_map(|(index, flag)| (!flag).then_some(index))
            .collect();
        self.revealed.fill(true);
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_way() {
        let mut tracker = RevealTracker::new(0.85, 3);
        assert_eq!(tracker.update(&[100.0, 900.0, 2000.0], 1000.0), vec![0]);
        assert_eq!(tracker.update(&[-500.0, 800.0, 1500.0], 1000.0), vec![1]);
        // scrolling back up never hides anything
        assert!(tracker.update(&[100.0, 1900.0, 3000.0], 1000.0).is_empty());
        assert!(tracker.is_revealed(1));
        assert!(!tracker.all_revealed());
        assert_eq!(tracker.reveal_all(), vec![2]);
        assert!(tracker.all_revealed());
    }
}
