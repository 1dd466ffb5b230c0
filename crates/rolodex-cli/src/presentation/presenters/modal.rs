use rolodex_engine::{format_date, format_phone, Controls, Directory};
use rolodex_types::UserRecord;

use crate::presentation::view_models::ModalViewModel;

/// The open record, or `None` while the modal is closed.
pub fn present_modal(directory: &Directory) -> Option<ModalViewModel> {
    let cursor = directory.cursor()?;
    let record = directory.current()?;
    Some(present_detail(cursor, directory.view_len(), record))
}

pub fn present_detail(index: usize, total: usize, record: &UserRecord) -> ModalViewModel {
    let location = &record.location;
    ModalViewModel {
        index,
        total,
        name: record.full_name(),
        email: record.email.clone(),
        city: location.city.clone(),
        phone: format_phone(&record.cell),
        address: format!(
            "{} {}, {}",
            location.street.number, location.street.name, location.city
        ),
        region: format!(
            "{}, {} {}",
            location.state, location.country, location.postcode
        ),
        birthday: format_date(&record.dob.date),
        picture: record.picture.large.clone(),
        controls: Controls::for_position(index, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_testing::fixtures::sample_records;

    #[test]
    fn test_closed_modal_presents_nothing() {
        let directory = Directory::with_records(sample_records());
        assert!(present_modal(&directory).is_none());
    }

    #[test]
    fn test_detail_fields_are_formatted() {
        let mut directory = Directory::with_records(sample_records());
        directory.open_at(4).unwrap();

        let vm = present_modal(&directory).unwrap();
        assert_eq!(vm.name, "Emma Davis");
        assert_eq!(vm.phone, "(912) 555-0164");
        assert_eq!(vm.address, "505 Mockingbird Hill, Savannah");
        assert_eq!(vm.region, "Georgia, United States 31401");
        assert_eq!(vm.birthday, "05/03/1990");
        assert_eq!(vm.index, 4);
        assert_eq!(vm.total, 12);
    }

    #[test]
    fn test_controls_reflect_filtered_edges() {
        let mut directory = Directory::with_records(sample_records());
        directory.apply_query("john");
        directory.open_at(1).unwrap();

        let vm = present_modal(&directory).unwrap();
        assert_eq!(vm.name, "John Carter");
        assert_eq!(
            vm.controls,
            Controls {
                prev: true,
                next: false
            }
        );
    }
}
