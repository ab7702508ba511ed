use super::Accumulator;

impl Accumulator<char> for String {
    #[inline]
    fn empty() -> Self {
        String::new()
    }

    #[inline]
    fn concat_mut(&mut self, ch: char) {
        self.push(ch);
    }
}

impl Accumulator<&str> for String {
    #[inline]
    fn empty() -> Self {
        String::new()
    }

    #[inline]
    fn concat_mut(&mut self, s: &str) {
        self.push_str(s);
    }
}

impl Accumulator<String> for String {
    #[inline]
    fn empty() -> Self {
        String::new()
    }

    #[inline]
    fn concat_mut(&mut self, s: String) {
        // Reuse the incoming buffer when there is nothing to prepend.
        if self.is_empty() {
            *self = s;
        } else {
            self.push_str(&s);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{interpose, into, map};

    #[test]
    fn concatenates_strs() {
        let out = into(String::from(">"), interpose("-"), ["a", "b", "c"]);
        assert_eq!(out, ">a-b-c");
    }

    #[test]
    fn concatenates_owned_strings() {
        let out = into(String::new(), map(|n: u8| n.to_string()), [1, 2, 3]);
        assert_eq!(out, "123");
    }
}
