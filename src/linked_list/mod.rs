//! # Singly Linked List
//!
//! A chain of heap allocated nodes. The list owns the head node and every
//! node owns the one after it, so releasing the list releases the whole
//! chain and no node can ever be shared between two lists.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the core traits for the chain, such as `Link`, `ChainNode` and `NodeWithData`.
//! - [`node::Node`]: A single link in the chain holding one value.
//! - [`list::LinkedList`]: The list itself.
//! - [`iter::Iter`]: A forward cursor over the nodes.
//! - [`error::ListError`]: Non-fatal "not found" outcomes of searching operations.
//!
//! Searching operations (`find`, `remove`, `add_after`) act on the first
//! matching node in head to tail order.
//!
//! # Examples
//!
//! ```
//! use singly_list::linked_list::{LinkedList, ListError};
//!
//! let mut list = LinkedList::new();
//! list.add_front("B");
//! list.add_back("C");
//! list.add_back("E");
//! list.add_after(&"C", "D").unwrap();
//! list.add_front("A");
//!
//! assert_eq!(list.values(), vec!["A", "B", "C", "D", "E"]);
//! assert_eq!(list.length(), 5);
//!
//! assert_eq!(list.remove(&"Z"), Err(ListError::NotFound));
//! assert_eq!(list.remove(&"C"), Ok("C"));
//! assert!(list.find(&"C").is_none());
//!
//! let mut joined = String::new();
//! for node in &list {
//!     joined.push_str(node.value());
//! }
//! assert_eq!(joined, "ABDE");
//! ```

pub mod traits;
pub mod node;
pub mod list;
pub mod iter;
pub mod error;

pub use error::ListError;
pub use iter::Iter;
pub use list::LinkedList;
pub use node::Node;
