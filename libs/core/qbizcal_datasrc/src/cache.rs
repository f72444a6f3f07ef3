use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use qbizcal::calendar::Calendar;

use crate::{CalendarSrc, LoadError};

// -----------------------------------------------------------------------------
// CachedCalendarSrc
// -----------------------------------------------------------------------------
/// [`CalendarSrc`] which remembers calendars loaded by the inner source.
///
/// Calendars are keyed by name. The lock is held while the inner source is called,
/// so concurrent requests of the same name hit the inner source only once.
/// Failed loads are not cached.
///
/// ```
/// use qbizcal_datasrc::{CachedCalendarSrc, CalendarLoader, CalendarSrc};
///
/// let src = CachedCalendarSrc::new(CalendarLoader::new());
///
/// let cal = src.get_calendar("weekdays").unwrap();
/// assert_eq!(src.get_calendar("weekdays").unwrap(), cal);
/// assert_eq!(src.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CachedCalendarSrc<S> {
    src: S,
    cache: Mutex<HashMap<String, Calendar>>,
}

//
// construction
//
impl<S> CachedCalendarSrc<S> {
    #[inline]
    pub fn new(src: S) -> Self {
        Self {
            src,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

//
// methods
//
impl<S> CachedCalendarSrc<S> {
    #[inline]
    pub fn inner(&self) -> &S {
        &self.src
    }

    // cached calendars are immutable, so a poisoned map is still consistent
    #[inline]
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Calendar>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of cached calendars.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all cached calendars. Next requests go to the inner source again.
    pub fn clear(&self) {
        log::trace!("Clearing calendar cache");
        self.lock().clear();
    }
}

impl<S: CalendarSrc> CalendarSrc for CachedCalendarSrc<S> {
    fn get_calendar(&self, name: &str) -> Result<Calendar, LoadError> {
        let mut cache = self.lock();
        if let Some(cal) = cache.get(name) {
            log::trace!("Calendar cache hit: {name}");
            return Ok(cal.clone());
        }

        log::trace!("Calendar cache miss: {name}");
        let cal = self.src.get_calendar(name)?;
        cache.insert(name.to_owned(), cal.clone());
        Ok(cal)
    }
}
