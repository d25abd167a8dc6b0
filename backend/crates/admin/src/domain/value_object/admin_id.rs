use kernel::id::Id;

pub struct AdminMarker;
pub type AdminId = Id<AdminMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_id_new() {
        let admin_id = AdminId::new();
        assert_eq!(admin_id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = uuid::Uuid::new_v4();
        let admin_id = AdminId::from_uuid(uuid);
        assert_eq!(admin_id.as_uuid(), &uuid);
    }
}
