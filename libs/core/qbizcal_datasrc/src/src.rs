use std::sync::Arc;

use qbizcal::calendar::Calendar;

use crate::LoadError;

// -----------------------------------------------------------------------------
// CalendarSrc
// -----------------------------------------------------------------------------
/// Source of calendars keyed by name.
pub trait CalendarSrc {
    fn get_calendar(&self, name: &str) -> Result<Calendar, LoadError>;
}

impl<S: CalendarSrc + ?Sized> CalendarSrc for &S {
    #[inline]
    fn get_calendar(&self, name: &str) -> Result<Calendar, LoadError> {
        (**self).get_calendar(name)
    }
}

impl<S: CalendarSrc + ?Sized> CalendarSrc for Arc<S> {
    #[inline]
    fn get_calendar(&self, name: &str) -> Result<Calendar, LoadError> {
        (**self).get_calendar(name)
    }
}
