use alloc::boxed::Box;

pub use singly_list_derive::ChainNode;

/// An owned link to the next node, or `None` at the end of the chain.
///
/// A bare `Chain` is not a [`Link`] itself, so importing the trait does not
/// add methods to every `Option<Box<_>>`:
///
/// ```compile_fail
/// use singly_list::linked_list::traits::{Chain, Link};
///
/// let chain: Chain<u8> = None;
/// let _ = chain.link();
/// ```
pub type Chain<N> = Option<Box<N>>;

/// A wrapper that lets a bare link slot act as a [`Link`].
///
/// Used to splice into or detach from a slot reached by walking the chain,
/// such as the empty link past the tail.
pub(crate) struct Slot<'a, N>(pub(crate) &'a mut Chain<N>);

impl<N> Link for Slot<'_, N> {
    type Target = N;

    #[inline]
    fn link(&self) -> &Chain<N> {
        &*self.0
    }

    #[inline]
    fn link_mut(&mut self) -> &mut Chain<N> {
        &mut *self.0
    }
}

/// A trait for anything that owns the link to a following node.
///
/// Both the list (whose link is its head) and every node implement it, so
/// splicing and unlinking read the same whether the neighbour is the list
/// itself or a node in the middle of the chain.
pub trait Link {
    /// The node type the link points to.
    type Target;

    /// Get the link to the next node
    fn link(&self) -> &Chain<Self::Target>;

    /// Get a mutable reference to the link to the next node
    fn link_mut(&mut self) -> &mut Chain<Self::Target>;

    /// Get the next node, if any
    #[inline]
    fn next(&self) -> Option<&Self::Target> {
        self.link().as_deref()
    }
}

/// A trait for a node in a singly linked list.
///
/// Usually implemented with `#[derive(ChainNode)]`, which also implements
/// [`Link`] and, when the struct has a `value` field, [`NodeWithData`]. The
/// generated impls name the traits through `::singly_list` unless the struct
/// carries `#[node(crate_path = "...")]`.
///
/// ```
/// use singly_list::linked_list::traits::{Chain, ChainNode, Link, NodeWithData};
///
/// #[derive(ChainNode)]
/// struct Step {
///     next: Chain<Step>,
///     value: u32,
/// }
///
/// let mut first = Step { next: None, value: 1 };
/// Box::new(Step { next: None, value: 3 }).append_to(&mut first);
/// Box::new(Step { next: None, value: 2 }).append_to(&mut first);
///
/// let second = first.next().unwrap();
/// assert_eq!(*second.data(), 2);
/// assert_eq!(second.next().map(|step| *step.data()), Some(3));
///
/// let detached = Step::detach(&mut first).unwrap();
/// assert_eq!((*detached).into_data(), 2);
/// assert_eq!(first.next().map(|step| *step.data()), Some(3));
/// ```
///
/// The `next` link may also be spelled `Option<Box<_>>`, and `value` is
/// optional:
///
/// ```
/// use singly_list::linked_list::traits::{ChainNode, Link};
///
/// #[derive(ChainNode)]
/// struct Marker {
///     next: Option<Box<Marker>>,
/// }
///
/// let mut head = Marker { next: None };
/// Box::new(Marker { next: None }).append_to(&mut head);
/// assert!(head.next().is_some());
/// ```
///
/// Fields other than `next` and `value` are rejected:
///
/// ```compile_fail
/// use singly_list::linked_list::traits::{Chain, ChainNode};
///
/// #[derive(ChainNode)]
/// struct Tagged {
///     next: Chain<Tagged>,
///     value: u32,
///     extra: u8,
/// }
/// ```
///
/// So is a struct without a `next` field:
///
/// ```compile_fail
/// use singly_list::linked_list::traits::ChainNode;
///
/// #[derive(ChainNode)]
/// struct Loose {
///     value: u32,
/// }
/// ```
///
/// And a `next` field that does not own a boxed node:
///
/// ```compile_fail
/// use singly_list::linked_list::traits::ChainNode;
///
/// #[derive(ChainNode)]
/// struct Numbered {
///     next: Option<u32>,
///     value: u32,
/// }
/// ```
///
/// Tuple structs and enums have no named fields to link through:
///
/// ```compile_fail
/// use singly_list::linked_list::traits::{Chain, ChainNode};
///
/// #[derive(ChainNode)]
/// struct Pair(Chain<Pair>, u32);
/// ```
///
/// ```compile_fail
/// use singly_list::linked_list::traits::ChainNode;
///
/// #[derive(ChainNode)]
/// enum Either {
///     Left,
///     Right,
/// }
/// ```
pub trait ChainNode: Link<Target = Self> + Sized {
    /// Splice the node right after `parent`.
    ///
    /// The node takes over whatever `parent` pointed to, and `parent` now
    /// points to the node.
    #[inline]
    fn append_to<L>(mut self: Box<Self>, parent: &mut L)
    where
        L: Link<Target = Self> + ?Sized,
    {
        *self.link_mut() = parent.link_mut().take();
        *parent.link_mut() = Some(self);
    }

    /// Detach the node following `parent` and hand back its ownership.
    ///
    /// `parent` is relinked to the detached node's successor. Returns `None`
    /// when `parent` is the end of the chain.
    #[inline]
    fn detach<L>(parent: &mut L) -> Option<Box<Self>>
    where
        L: Link<Target = Self> + ?Sized,
    {
        let mut node = parent.link_mut().take()?;
        *parent.link_mut() = node.link_mut().take();
        Some(node)
    }
}

/// A trait for a node that contains data.
pub trait NodeWithData: ChainNode {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;

    /// Consume the node and return its data
    fn into_data(self) -> Self::Data;
}
