use pwnfox_rs::HeaderCollection;

pub fn header_value<'a>(headers: &'a HeaderCollection, name: &str) -> Option<&'a str> {
    headers.get(name)
}

pub fn has_header(headers: &HeaderCollection, name: &str) -> bool {
    headers.contains(name)
}

pub fn header_count(headers: &HeaderCollection, name: &str) -> usize {
    headers.get_all(name).count()
}
