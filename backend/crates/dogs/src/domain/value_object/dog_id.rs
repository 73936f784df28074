use kernel::id::Id;

pub struct DogMarker;
pub type DogId = Id<DogMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_id_new() {
        let dog_id = DogId::new();
        assert_eq!(dog_id.as_uuid().get_version_num(), 4); // UUIDv4
    }
}
