use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 10;

/// Room categories offered in the booking form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Deluxe,
    Suite,
    Family,
    Villa,
}

impl RoomCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Deluxe => "deluxe",
            RoomCategory::Suite => "suite",
            RoomCategory::Family => "family",
            RoomCategory::Villa => "villa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomCategory::Deluxe => "Deluxe Room",
            RoomCategory::Suite => "Suite Room",
            RoomCategory::Family => "Family Room",
            RoomCategory::Villa => "Private Villa",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "deluxe" => Some(RoomCategory::Deluxe),
            "suite" => Some(RoomCategory::Suite),
            "family" => Some(RoomCategory::Family),
            "villa" => Some(RoomCategory::Villa),
            _ => None,
        }
    }

    pub fn all() -> Vec<RoomCategory> {
        vec![
            RoomCategory::Deluxe,
            RoomCategory::Suite,
            RoomCategory::Family,
            RoomCategory::Villa,
        ]
    }
}

/// Errors found while validating the booking form
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Please select a room")]
    MissingRoom,
    #[error("Unknown room type: {0}")]
    UnknownRoom(String),
    #[error("Number of guests must be a whole number")]
    InvalidGuests,
    #[error("Number of guests must be between 1 and 10")]
    GuestsOutOfRange,
    #[error("Invalid {field} date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
    #[error("Check-out must be after check-in")]
    CheckOutBeforeCheckIn,
    #[error("Phone number is required")]
    MissingPhone,
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Raw values as typed into the booking modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    pub room: String,
    pub guests: String,
    pub check_in: String,
    pub check_out: String,
    pub phone: String,
    pub email: String,
}

/// A booking form that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub room: RoomCategory,
    pub guests: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub phone: String,
    pub email: Option<String>,
}

impl BookingRequest {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, BookingError> {
    // <input type="date"> always submits ISO dates.
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| BookingError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

impl BookingForm {
    /// Checks every field and collects all problems, so the form can list
    /// them together.
    pub fn validate(&self) -> Result<BookingRequest, Vec<BookingError>> {
        let mut errors = Vec::new();

        let room = if self.room.trim().is_empty() {
            errors.push(BookingError::MissingRoom);
            None
        } else {
            let room = RoomCategory::from_str(&self.room);
            if room.is_none() {
                errors.push(BookingError::UnknownRoom(self.room.clone()));
            }
            room
        };

        let guests = match self.guests.trim().parse::<u32>() {
            Ok(n) if (MIN_GUESTS..=MAX_GUESTS).contains(&n) => Some(n),
            Ok(_) => {
                errors.push(BookingError::GuestsOutOfRange);
                None
            }
            Err(_) => {
                errors.push(BookingError::InvalidGuests);
                None
            }
        };

        let check_in = parse_date("check-in", &self.check_in).map_err(|e| errors.push(e)).ok();
        let check_out = parse_date("check-out", &self.check_out).map_err(|e| errors.push(e)).ok();
        if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
            if check_out <= check_in {
                errors.push(BookingError::CheckOutBeforeCheckIn);
            }
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.push(BookingError::MissingPhone);
        }

        let email = self.email.trim();
        let email = if email.is_empty() {
            None
        } else {
            if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
                errors.push(BookingError::InvalidEmail(email.to_string()));
            }
            Some(email.to_string())
        };

        match (room, guests, check_in, check_out) {
            (Some(room), Some(guests), Some(check_in), Some(check_out)) if errors.is_empty() => {
                Ok(BookingRequest {
                    room,
                    guests,
                    check_in,
                    check_out,
                    phone: phone.to_string(),
                    email,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> BookingForm {
        BookingForm {
            room: "suite".into(),
            guests: "2".into(),
            check_in: "2026-12-20".into(),
            check_out: "2026-12-24".into(),
            phone: "+84 236 3656 293".into(),
            email: String::new(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        let req = valid_form().validate().unwrap();
        assert_eq!(req.room, RoomCategory::Suite);
        assert_eq!(req.guests, 2);
        assert_eq!(req.nights(), 4);
        assert_eq!(req.email, None);
    }

    #[test]
    fn keeps_optional_email() {
        let form = BookingForm {
            email: " guest@example.com ".into(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap().email.as_deref(), Some("guest@example.com"));
    }

    #[test]
    fn rejects_each_bad_field() {
        let cases = [
            (BookingForm { room: "".into(), ..valid_form() }, BookingError::MissingRoom),
            (
                BookingForm { room: "penthouse".into(), ..valid_form() },
                BookingError::UnknownRoom("penthouse".into()),
            ),
            (BookingForm { guests: "two".into(), ..valid_form() }, BookingError::InvalidGuests),
            (BookingForm { guests: "0".into(), ..valid_form() }, BookingError::GuestsOutOfRange),
            (BookingForm { guests: "11".into(), ..valid_form() }, BookingError::GuestsOutOfRange),
            (
                BookingForm { check_in: "20/12/2026".into(), ..valid_form() },
                BookingError::InvalidDate {
                    field: "check-in",
                    value: "20/12/2026".into(),
                },
            ),
            (
                BookingForm { check_out: "2026-12-20".into(), ..valid_form() },
                BookingError::CheckOutBeforeCheckIn,
            ),
            (BookingForm { phone: "   ".into(), ..valid_form() }, BookingError::MissingPhone),
            (
                BookingForm { email: "nobody".into(), ..valid_form() },
                BookingError::InvalidEmail("nobody".into()),
            ),
        ];

        for (form, expected) in cases {
            assert_eq!(form.validate(), Err(vec![expected]));
        }
    }

    #[test]
    fn empty_form_lists_every_required_field() {
        let errors = BookingForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&BookingError::MissingRoom));
        assert!(errors.contains(&BookingError::MissingPhone));
    }

    #[test]
    fn room_categories_round_trip_through_option_values() {
        for room in RoomCategory::all() {
            assert_eq!(RoomCategory::from_str(room.as_str()), Some(room));
        }
    }
}
