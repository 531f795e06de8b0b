use crate::{
    field::{Field, FieldType, Item, ItemValueType},
    schedule::Schedule,
    utils, CronError, Result,
};

// Cursor over the expression text. Alternatives that reject before a
// commit point restore the cursor; failures at or past a commit point
// abort the whole parse with the expected construct and its position.
pub(crate) struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    // Six fields in fixed order, one whitespace character between each
    // pair, anchored to the end of input.
    pub(crate) fn schedule(mut self) -> Result<Schedule> {
        let second = self.field(FieldType::Seconds)?;
        self.separator()?;
        let minute = self.field(FieldType::Minutes)?;
        self.separator()?;
        let hour = self.field(FieldType::Hours)?;
        self.separator()?;
        let dom = self.field(FieldType::Doms)?;
        self.separator()?;
        let month = self.field(FieldType::Months)?;
        self.separator()?;
        let dow = self.field(FieldType::Dows)?;
        self.end_of_input()?;

        Ok(Schedule::from_fields(second, minute, hour, dom, month, dow))
    }

    // One or more comma-separated items. A comma not followed by a viable
    // item start is left unconsumed, so the enclosing separator check
    // reports the error at the comma itself.
    pub(crate) fn field(&mut self, type_: FieldType) -> Result<Field> {
        let first = self.item(type_)?;
        let mut items = vec![first];

        loop {
            let checkpoint = self.pos;
            if !self.eat(b',') {
                break;
            }
            match self.try_item(type_)? {
                Some(item) => items.push(item),
                None => {
                    self.pos = checkpoint;
                    break;
                }
            }
        }

        Ok(Field::new(items))
    }

    fn item(&mut self, type_: FieldType) -> Result<Item> {
        match self.try_item(type_)? {
            Some(item) => Ok(item),
            None => Err(self.fail(type_.value_label(), self.pos)),
        }
    }

    // Ordered choice: range, then single value, then wildcard, with an
    // optional step suffix. `-` commits to a range end and `/` commits to
    // a step value.
    fn try_item(&mut self, type_: FieldType) -> Result<Option<Item>> {
        let (start, end) = if let Some(start) = self.try_value(type_) {
            if self.eat(b'-') {
                let end = self.value(type_)?;
                (start, end)
            } else {
                (start, start)
            }
        } else if self.eat(b'*') {
            (Item::WILDCARD, Item::WILDCARD)
        } else {
            return Ok(None);
        };

        let step = if self.eat(b'/') { self.step()? } else { 1 };

        Ok(Some(Item::new(start, end, step)))
    }

    fn value(&mut self, type_: FieldType) -> Result<ItemValueType> {
        match self.try_value(type_) {
            Some(value) => Ok(value),
            None => Err(self.fail(type_.value_label(), self.pos)),
        }
    }

    // Digital literal within the field bounds or, for fields with a
    // mnemonic table, a 3-letter uppercase name. Rejection restores the
    // cursor.
    fn try_value(&mut self, type_: FieldType) -> Option<ItemValueType> {
        let checkpoint = self.pos;
        let (min, max) = type_.min_max();

        if self.peek().is_some_and(|b| b.is_ascii_digit()) {
            let digits = self.digits();
            return match utils::parse_digital_value(digits, min, max) {
                Some(value) => Some(value),
                None => {
                    self.pos = checkpoint;
                    None
                }
            };
        }

        if let Some((variants, starter_shift)) = type_.symbols() {
            if let Some(mnemonic) = self.input.get(self.pos..self.pos + 3) {
                if let Some(value) = utils::parse_string_value(mnemonic, variants) {
                    self.pos += 3;
                    return Some(value + starter_shift);
                }
            }
        }

        None
    }

    // Any value representable in the step type is allowed, zero included.
    fn step(&mut self) -> Result<u8> {
        let checkpoint = self.pos;
        let digits = self.digits();
        match digits.parse::<u8>() {
            Ok(step) => Ok(step),
            Err(_) => Err(self.fail("step value", checkpoint)),
        }
    }

    // Exactly one whitespace character, no runs.
    fn separator(&mut self) -> Result<()> {
        match self.peek() {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.fail("space", self.pos)),
        }
    }

    fn end_of_input(&self) -> Result<()> {
        if self.pos == self.input.len() {
            Ok(())
        } else {
            Err(self.fail("end of input", self.pos))
        }
    }

    fn digits(&mut self) -> &'a str {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    // `at` is a byte offset on a character boundary; reported positions
    // are 1-based character offsets.
    fn fail(&self, expected: &'static str, at: usize) -> CronError {
        CronError::MalformedExpression {
            expected,
            position: self.input[..at].chars().count() + 1,
        }
    }
}
