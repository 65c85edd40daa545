use {
    std::collections::BTreeSet,
    uuid::Uuid,
};

use crate::{
    config::{CHAT, DF},
    domain::{Message, Role},
};

/// Handed out for every accepted submission; redeem it with
/// [`ChatSession::deliver_reply`] once the reply delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReplyTicket(u64);

/// Ordered, append-only chat log plus the input buffer and typing indicator.
///
/// Replies are not scheduled here; the owning view arms a timer per ticket.
/// Overlapping submissions interleave: each ticket gets its own reply, and
/// since the delay is fixed, replies land in submission order. The typing
/// flag stays up while any ticket is outstanding.
#[derive(Debug, Clone)]
pub struct ChatSession {
    namespace: Uuid,
    next_seq: u64,
    messages: Vec<Message>,
    input: String,
    pending: BTreeSet<ReplyTicket>,
}

impl ChatSession {
    /// Empty log. `session_key` only seeds message ids.
    pub fn new(session_key: u64) -> Self {
        Self {
            namespace: Uuid::new_v5(&Uuid::NAMESPACE_OID, &session_key.to_be_bytes()),
            next_seq: 0,
            messages: Vec::new(),
            input: String::new(),
            pending: BTreeSet::new(),
        }
    }

    /// Log that opens with the assistant greeting, as the terminal shows it.
    pub fn with_greeting(session_key: u64) -> Self {
        let mut session = Self::new(session_key);
        session.append(Role::Assistant, CHAT.greeting);
        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Empty or whitespace-only text is ignored. Anything else is logged
    /// verbatim as a user message and the input buffer is cleared.
    pub fn submit(&mut self, text: &str) -> Option<ReplyTicket> {
        if text.trim().is_empty() {
            return None;
        }
        let seq = self.append(Role::User, text);
        self.input.clear();
        let ticket = ReplyTicket(seq);
        self.pending.insert(ticket);
        if DF.log_chat {
            log::info!("chat submit #{} ({} pending)", seq, self.pending.len());
        }
        Some(ticket)
    }

    /// Submits whatever is in the input buffer.
    pub fn submit_input(&mut self) -> Option<ReplyTicket> {
        let text = std::mem::take(&mut self.input);
        let ticket = self.submit(&text);
        if ticket.is_none() {
            self.input = text;
        }
        ticket
    }

    /// Appends the canned reply for `ticket`. Unknown or already redeemed
    /// tickets are ignored.
    pub fn deliver_reply(&mut self, ticket: ReplyTicket) -> bool {
        if !self.pending.remove(&ticket) {
            return false;
        }
        self.append(Role::Assistant, CHAT.canned_reply);
        if DF.log_chat {
            log::info!("chat reply for #{} ({} pending)", ticket.0, self.pending.len());
        }
        true
    }

    pub fn transcript_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.messages)
    }

    fn append(&mut self, role: Role, text: &str) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = Uuid::new_v5(&self.namespace, &seq.to_be_bytes());
        self.messages.push(Message::new(id, role, text));
        seq
    }
}

#[cfg(test)]
mod tests {
    use {super::*, proptest::prelude::*, std::collections::HashSet};

    #[test]
    fn submit_then_reply_keeps_causal_order() {
        let mut chat = ChatSession::new(1);
        let ticket = chat.submit("Buy 1 BNB").unwrap();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, Role::User);
        assert_eq!(chat.messages()[0].text, "Buy 1 BNB");
        assert!(chat.is_typing());

        assert!(chat.deliver_reply(ticket));
        assert!(!chat.is_typing());
        let roles: Vec<Role> = chat.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(chat.messages()[1].text, CHAT.canned_reply);
    }

    #[test]
    fn empty_and_whitespace_are_ignored() {
        let mut chat = ChatSession::new(1);
        for text in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(chat.submit(text), None);
        }
        assert!(chat.messages().is_empty());
        assert!(!chat.is_typing());
    }

    #[test]
    fn submit_input_clears_buffer_only_when_accepted() {
        let mut chat = ChatSession::new(1);
        chat.input_mut().push_str("   ");
        assert_eq!(chat.submit_input(), None);
        assert_eq!(chat.input(), "   ");

        chat.input_mut().push_str("price of BNB?");
        assert!(chat.submit_input().is_some());
        assert_eq!(chat.input(), "");
        assert_eq!(chat.messages()[0].text, "   price of BNB?");
    }

    #[test]
    fn typing_stays_up_until_last_pending_reply() {
        let mut chat = ChatSession::new(1);
        let a = chat.submit("one").unwrap();
        let b = chat.submit("two").unwrap();
        assert_eq!(chat.pending_replies(), 2);
        assert!(chat.deliver_reply(a));
        assert!(chat.is_typing());
        assert!(!chat.deliver_reply(a));
        assert!(chat.deliver_reply(b));
        assert!(!chat.is_typing());
        assert_eq!(chat.messages().len(), 4);
    }

    #[test]
    fn greeting_opens_the_terminal_log() {
        let chat = ChatSession::with_greeting(9);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, Role::Assistant);
        assert_eq!(chat.messages()[0].text, CHAT.greeting);
        assert!(!chat.is_typing());
    }

    #[test]
    fn ids_are_unique_and_session_scoped() {
        let mut a = ChatSession::new(1);
        let mut b = ChatSession::new(2);
        for i in 0..20 {
            let ta = a.submit(&format!("a{i}")).unwrap();
            a.deliver_reply(ta);
            b.submit(&format!("b{i}"));
        }
        let ids: HashSet<Uuid> = a
            .messages()
            .iter()
            .chain(b.messages())
            .map(|m| m.id)
            .collect();
        assert_eq!(ids.len(), a.messages().len() + b.messages().len());
    }

    #[test]
    fn transcript_serializes_roles_in_lowercase() {
        let mut chat = ChatSession::new(5);
        let t = chat.submit("hi").unwrap();
        chat.deliver_reply(t);
        let json = chat.transcript_json().unwrap();
        let parsed: Vec<Message> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, chat.messages());
        assert!(json.contains("\"role\": \"user\""));
        assert!(json.contains("\"role\": \"assistant\""));
    }

    proptest! {
        #[test]
        fn non_blank_text_yields_one_user_then_one_reply(text in "\\PC*") {
            prop_assume!(!text.trim().is_empty());
            let mut chat = ChatSession::new(0);
            let ticket = chat.submit(&text);
            prop_assert!(ticket.is_some());
            prop_assert_eq!(chat.messages().len(), 1);
            prop_assert!(chat.is_typing());
            chat.deliver_reply(ticket.unwrap());
            prop_assert_eq!(chat.messages().len(), 2);
            prop_assert_eq!(chat.messages()[0].role, Role::User);
            prop_assert_eq!(&chat.messages()[0].text, &text);
            prop_assert_eq!(chat.messages()[1].role, Role::Assistant);
        }

        #[test]
        fn blank_text_changes_nothing(text in "[ \\t\\r\\n]*") {
            let mut chat = ChatSession::new(0);
            prop_assert!(chat.submit(&text).is_none());
            prop_assert!(chat.messages().is_empty());
            prop_assert!(!chat.is_typing());
        }
    }
}
