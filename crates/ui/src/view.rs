use crate::table::RecentRow;
use scorecast_models::PredictionResult;

/// Port for everything the controller shows the user.
pub trait ResultView {
    /// Marks a request as in flight. Turning it on supersedes any result
    /// currently on screen.
    fn set_loading(&mut self, active: bool);

    fn render_result(&mut self, result: &PredictionResult);

    /// Blocking generic notice; the detail stays on the diagnostic log.
    fn render_error(&mut self, message: &str);

    /// Replaces the recent table with the given rows and shows it.
    fn render_recent(&mut self, rows: Vec<RecentRow>);

    /// Inserts a row at the top of the recent table and shows it.
    fn prepend_recent(&mut self, row: RecentRow);

    /// Shows the recent table as it currently stands.
    fn redraw_recent(&self);
}
