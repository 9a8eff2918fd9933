//! Built-in descriptors for the core of the Java platform library.
//!
//! Signatures use the class file `Signature` attribute grammar. The table is closed under
//! references: every class named by a signature here is itself in the table.

use nova_classfile::access::{ACC_ABSTRACT, ACC_FINAL, ACC_PROTECTED, ACC_PUBLIC, ACC_STATIC, ACC_VARARGS};

use crate::decl::TypeKind;

pub(crate) struct HostClass {
    /// Canonical name, `java.util.Map.Entry` for nested types.
    pub(crate) name: &'static str,
    pub(crate) package: &'static str,
    pub(crate) kind: TypeKind,
    /// Empty only for `java.lang.Object`.
    pub(crate) signature: &'static str,
    pub(crate) annotations: &'static [&'static str],
    pub(crate) fields: &'static [HostMember],
    /// Constructors are listed as `<init>`.
    pub(crate) methods: &'static [HostMember],
    pub(crate) enclosing: Option<&'static str>,
    pub(crate) nested: &'static [&'static str],
}

pub(crate) struct HostMember {
    pub(crate) flags: u16,
    pub(crate) name: &'static str,
    pub(crate) signature: &'static str,
}

const fn member(flags: u16, name: &'static str, signature: &'static str) -> HostMember {
    HostMember {
        flags,
        name,
        signature,
    }
}

const PUBLIC: u16 = ACC_PUBLIC;
const PROTECTED: u16 = ACC_PROTECTED;
const FINAL: u16 = ACC_PUBLIC | ACC_FINAL;
const STATIC: u16 = ACC_PUBLIC | ACC_STATIC;
const CONSTANT: u16 = ACC_PUBLIC | ACC_STATIC | ACC_FINAL;
const ABSTRACT: u16 = ACC_PUBLIC | ACC_ABSTRACT;
const STATIC_VARARGS: u16 = ACC_PUBLIC | ACC_STATIC | ACC_VARARGS;

const FUNCTIONAL: &[&str] = &["java.lang.FunctionalInterface"];

const CLASS: HostClass = HostClass {
    name: "",
    package: "",
    kind: TypeKind::Class,
    signature: "",
    annotations: &[],
    fields: &[],
    methods: &[],
    enclosing: None,
    nested: &[],
};

const INTERFACE: HostClass = HostClass {
    kind: TypeKind::Interface,
    ..CLASS
};

pub(crate) static HOST_CLASSES: &[HostClass] = &[
    // java.lang
    HostClass {
        name: "java.lang.Object",
        package: "java.lang",
        signature: "",
        methods: &[
            member(PUBLIC, "<init>", "()V"),
            member(FINAL, "getClass", "()Ljava/lang/Class<*>;"),
            member(PUBLIC, "hashCode", "()I"),
            member(PUBLIC, "equals", "(Ljava/lang/Object;)Z"),
            member(PROTECTED, "clone", "()Ljava/lang/Object;"),
            member(PUBLIC, "toString", "()Ljava/lang/String;"),
            member(FINAL, "notify", "()V"),
            member(FINAL, "notifyAll", "()V"),
            member(FINAL, "wait", "()V"),
            member(FINAL, "wait", "(J)V"),
            member(FINAL, "wait", "(JI)V"),
            member(PROTECTED, "finalize", "()V"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.Class",
        package: "java.lang",
        signature: "<T:Ljava/lang/Object;>Ljava/lang/Object;Ljava/io/Serializable;",
        methods: &[
            member(PUBLIC, "getName", "()Ljava/lang/String;"),
            member(PUBLIC, "getSimpleName", "()Ljava/lang/String;"),
            member(PUBLIC, "isInstance", "(Ljava/lang/Object;)Z"),
            member(PUBLIC, "isInterface", "()Z"),
            member(PUBLIC, "cast", "(Ljava/lang/Object;)TT;"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.String",
        package: "java.lang",
        signature: "Ljava/lang/Object;Ljava/io/Serializable;Ljava/lang/Comparable<Ljava/lang/String;>;Ljava/lang/CharSequence;",
        fields: &[member(
            CONSTANT,
            "CASE_INSENSITIVE_ORDER",
            "Ljava/util/Comparator<Ljava/lang/String;>;",
        )],
        methods: &[
            member(PUBLIC, "<init>", "()V"),
            member(PUBLIC, "<init>", "(Ljava/lang/String;)V"),
            member(PUBLIC, "<init>", "([C)V"),
            member(PUBLIC, "length", "()I"),
            member(PUBLIC, "isEmpty", "()Z"),
            member(PUBLIC, "charAt", "(I)C"),
            member(PUBLIC, "substring", "(I)Ljava/lang/String;"),
            member(PUBLIC, "substring", "(II)Ljava/lang/String;"),
            member(PUBLIC, "subSequence", "(II)Ljava/lang/CharSequence;"),
            member(PUBLIC, "indexOf", "(I)I"),
            member(PUBLIC, "indexOf", "(Ljava/lang/String;)I"),
            member(PUBLIC, "contains", "(Ljava/lang/CharSequence;)Z"),
            member(PUBLIC, "startsWith", "(Ljava/lang/String;)Z"),
            member(PUBLIC, "endsWith", "(Ljava/lang/String;)Z"),
            member(PUBLIC, "concat", "(Ljava/lang/String;)Ljava/lang/String;"),
            member(PUBLIC, "trim", "()Ljava/lang/String;"),
            member(PUBLIC, "toUpperCase", "()Ljava/lang/String;"),
            member(PUBLIC, "toLowerCase", "()Ljava/lang/String;"),
            member(PUBLIC, "split", "(Ljava/lang/String;)[Ljava/lang/String;"),
            member(PUBLIC, "toCharArray", "()[C"),
            member(PUBLIC, "compareTo", "(Ljava/lang/String;)I"),
            member(PUBLIC, "equals", "(Ljava/lang/Object;)Z"),
            member(PUBLIC, "hashCode", "()I"),
            member(PUBLIC, "toString", "()Ljava/lang/String;"),
            member(STATIC, "valueOf", "(Ljava/lang/Object;)Ljava/lang/String;"),
            member(STATIC, "valueOf", "([C)Ljava/lang/String;"),
            member(STATIC, "valueOf", "(Z)Ljava/lang/String;"),
            member(STATIC, "valueOf", "(C)Ljava/lang/String;"),
            member(STATIC, "valueOf", "(I)Ljava/lang/String;"),
            member(STATIC, "valueOf", "(J)Ljava/lang/String;"),
            member(STATIC, "valueOf", "(F)Ljava/lang/String;"),
            member(STATIC, "valueOf", "(D)Ljava/lang/String;"),
            member(
                STATIC_VARARGS,
                "format",
                "(Ljava/lang/String;[Ljava/lang/Object;)Ljava/lang/String;",
            ),
            member(
                STATIC_VARARGS,
                "join",
                "(Ljava/lang/CharSequence;[Ljava/lang/CharSequence;)Ljava/lang/String;",
            ),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.CharSequence",
        package: "java.lang",
        signature: "Ljava/lang/Object;",
        methods: &[
            member(ABSTRACT, "length", "()I"),
            member(ABSTRACT, "charAt", "(I)C"),
            member(ABSTRACT, "subSequence", "(II)Ljava/lang/CharSequence;"),
            member(ABSTRACT, "toString", "()Ljava/lang/String;"),
        ],
        ..INTERFACE
    },
    HostClass {
        name: "java.lang.Comparable",
        package: "java.lang",
        signature: "<T:Ljava/lang/Object;>Ljava/lang/Object;",
        methods: &[member(ABSTRACT, "compareTo", "(TT;)I")],
        ..INTERFACE
    },
    HostClass {
        name: "java.lang.Number",
        package: "java.lang",
        signature: "Ljava/lang/Object;Ljava/io/Serializable;",
        methods: &[
            member(PUBLIC, "<init>", "()V"),
            member(ABSTRACT, "intValue", "()I"),
            member(ABSTRACT, "longValue", "()J"),
            member(ABSTRACT, "floatValue", "()F"),
            member(ABSTRACT, "doubleValue", "()D"),
            member(PUBLIC, "byteValue", "()B"),
            member(PUBLIC, "shortValue", "()S"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.Integer",
        package: "java.lang",
        signature: "Ljava/lang/Number;Ljava/lang/Comparable<Ljava/lang/Integer;>;",
        fields: &[
            member(CONSTANT, "MAX_VALUE", "I"),
            member(CONSTANT, "MIN_VALUE", "I"),
        ],
        methods: &[
            member(PUBLIC, "<init>", "(I)V"),
            member(PUBLIC, "intValue", "()I"),
            member(PUBLIC, "longValue", "()J"),
            member(PUBLIC, "floatValue", "()F"),
            member(PUBLIC, "doubleValue", "()D"),
            member(PUBLIC, "compareTo", "(Ljava/lang/Integer;)I"),
            member(PUBLIC, "equals", "(Ljava/lang/Object;)Z"),
            member(PUBLIC, "hashCode", "()I"),
            member(PUBLIC, "toString", "()Ljava/lang/String;"),
            member(STATIC, "valueOf", "(I)Ljava/lang/Integer;"),
            member(STATIC, "valueOf", "(Ljava/lang/String;)Ljava/lang/Integer;"),
            member(STATIC, "parseInt", "(Ljava/lang/String;)I"),
            member(STATIC, "toString", "(I)Ljava/lang/String;"),
            member(STATIC, "max", "(II)I"),
            member(STATIC, "sum", "(II)I"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.Long",
        package: "java.lang",
        signature: "Ljava/lang/Number;Ljava/lang/Comparable<Ljava/lang/Long;>;",
        fields: &[
            member(CONSTANT, "MAX_VALUE", "J"),
            member(CONSTANT, "MIN_VALUE", "J"),
        ],
        methods: &[
            member(PUBLIC, "<init>", "(J)V"),
            member(PUBLIC, "intValue", "()I"),
            member(PUBLIC, "longValue", "()J"),
            member(PUBLIC, "floatValue", "()F"),
            member(PUBLIC, "doubleValue", "()D"),
            member(PUBLIC, "compareTo", "(Ljava/lang/Long;)I"),
            member(STATIC, "valueOf", "(J)Ljava/lang/Long;"),
            member(STATIC, "parseLong", "(Ljava/lang/String;)J"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.Short",
        package: "java.lang",
        signature: "Ljava/lang/Number;Ljava/lang/Comparable<Ljava/lang/Short;>;",
        methods: &[
            member(PUBLIC, "<init>", "(S)V"),
            member(PUBLIC, "intValue", "()I"),
            member(PUBLIC, "longValue", "()J"),
            member(PUBLIC, "floatValue", "()F"),
            member(PUBLIC, "doubleValue", "()D"),
            member(PUBLIC, "compareTo", "(Ljava/lang/Short;)I"),
            member(STATIC, "valueOf", "(S)Ljava/lang/Short;"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.Byte",
        package: "java.lang",
        signature: "Ljava/lang/Number;Ljava/lang/Comparable<Ljava/lang/Byte;>;",
        methods: &[
            member(PUBLIC, "<init>", "(B)V"),
            member(PUBLIC, "intValue", "()I"),
            member(PUBLIC, "longValue", "()J"),
            member(PUBLIC, "floatValue", "()F"),
            member(PUBLIC, "doubleValue", "()D"),
            member(PUBLIC, "compareTo", "(Ljava/lang/Byte;)I"),
            member(STATIC, "valueOf", "(B)Ljava/lang/Byte;"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.Float",
        package: "java.lang",
        signature: "Ljava/lang/Number;Ljava/lang/Comparable<Ljava/lang/Float;>;",
        methods: &[
            member(PUBLIC, "<init>", "(F)V"),
            member(PUBLIC, "intValue", "()I"),
            member(PUBLIC, "longValue", "()J"),
            member(PUBLIC, "floatValue", "()F"),
            member(PUBLIC, "doubleValue", "()D"),
            member(PUBLIC, "compareTo", "(Ljava/lang/Float;)I"),
            member(STATIC, "valueOf", "(F)Ljava/lang/Float;"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.Double",
        package: "java.lang",
        signature: "Ljava/lang/Number;Ljava/lang/Comparable<Ljava/lang/Double;>;",
        methods: &[
            member(PUBLIC, "<init>", "(D)V"),
            member(PUBLIC, "intValue", "()I"),
            member(PUBLIC, "longValue", "()J"),
            member(PUBLIC, "floatValue", "()F"),
            member(PUBLIC, "doubleValue", "()D"),
            member(PUBLIC, "compareTo", "(Ljava/lang/Double;)I"),
            member(STATIC, "valueOf", "(D)Ljava/lang/Double;"),
            member(STATIC, "parseDouble", "(Ljava/lang/String;)D"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.Boolean",
        package: "java.lang",
        signature: "Ljava/lang/Object;Ljava/io/Serializable;Ljava/lang/Comparable<Ljava/lang/Boolean;>;",
        fields: &[
            member(CONSTANT, "TRUE", "Ljava/lang/Boolean;"),
            member(CONSTANT, "FALSE", "Ljava/lang/Boolean;"),
        ],
        methods: &[
            member(PUBLIC, "<init>", "(Z)V"),
            member(PUBLIC, "booleanValue", "()Z"),
            member(PUBLIC, "compareTo", "(Ljava/lang/Boolean;)I"),
            member(STATIC, "valueOf", "(Z)Ljava/lang/Boolean;"),
            member(STATIC, "parseBoolean", "(Ljava/lang/String;)Z"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.Character",
        package: "java.lang",
        signature: "Ljava/lang/Object;Ljava/io/Serializable;Ljava/lang/Comparable<Ljava/lang/Character;>;",
        methods: &[
            member(PUBLIC, "<init>", "(C)V"),
            member(PUBLIC, "charValue", "()C"),
            member(PUBLIC, "compareTo", "(Ljava/lang/Character;)I"),
            member(STATIC, "valueOf", "(C)Ljava/lang/Character;"),
            member(STATIC, "isDigit", "(C)Z"),
            member(STATIC, "isLetter", "(C)Z"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.Enum",
        package: "java.lang",
        signature: "<E:Ljava/lang/Enum<TE;>;>Ljava/lang/Object;Ljava/lang/Comparable<TE;>;Ljava/io/Serializable;",
        methods: &[
            member(PROTECTED, "<init>", "(Ljava/lang/String;I)V"),
            member(FINAL, "name", "()Ljava/lang/String;"),
            member(FINAL, "ordinal", "()I"),
            member(FINAL, "compareTo", "(TE;)I"),
            member(FINAL, "getDeclaringClass", "()Ljava/lang/Class<TE;>;"),
            member(PUBLIC, "toString", "()Ljava/lang/String;"),
            member(
                STATIC,
                "valueOf",
                "<T:Ljava/lang/Enum<TT;>;>(Ljava/lang/Class<TT;>;Ljava/lang/String;)TT;",
            ),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.lang.Iterable",
        package: "java.lang",
        signature: "<T:Ljava/lang/Object;>Ljava/lang/Object;",
        methods: &[
            member(ABSTRACT, "iterator", "()Ljava/util/Iterator<TT;>;"),
            member(PUBLIC, "forEach", "(Ljava/util/function/Consumer<-TT;>;)V"),
        ],
        ..INTERFACE
    },
    HostClass {
        name: "java.lang.Runnable",
        package: "java.lang",
        signature: "Ljava/lang/Object;",
        annotations: FUNCTIONAL,
        methods: &[member(ABSTRACT, "run", "()V")],
        ..INTERFACE
    },
    HostClass {
        name: "java.lang.Cloneable",
        package: "java.lang",
        signature: "Ljava/lang/Object;",
        ..INTERFACE
    },
    HostClass {
        name: "java.lang.FunctionalInterface",
        package: "java.lang",
        kind: TypeKind::Annotation,
        signature: "Ljava/lang/Object;Ljava/lang/annotation/Annotation;",
        ..CLASS
    },
    HostClass {
        name: "java.lang.Deprecated",
        package: "java.lang",
        kind: TypeKind::Annotation,
        signature: "Ljava/lang/Object;Ljava/lang/annotation/Annotation;",
        ..CLASS
    },
    HostClass {
        name: "java.lang.annotation.Annotation",
        package: "java.lang.annotation",
        signature: "Ljava/lang/Object;",
        methods: &[
            member(ABSTRACT, "annotationType", "()Ljava/lang/Class<+Ljava/lang/annotation/Annotation;>;"),
            member(ABSTRACT, "equals", "(Ljava/lang/Object;)Z"),
            member(ABSTRACT, "hashCode", "()I"),
            member(ABSTRACT, "toString", "()Ljava/lang/String;"),
        ],
        ..INTERFACE
    },
    // java.io
    HostClass {
        name: "java.io.Serializable",
        package: "java.io",
        signature: "Ljava/lang/Object;",
        ..INTERFACE
    },
    // java.util
    HostClass {
        name: "java.util.Iterator",
        package: "java.util",
        signature: "<E:Ljava/lang/Object;>Ljava/lang/Object;",
        methods: &[
            member(ABSTRACT, "hasNext", "()Z"),
            member(ABSTRACT, "next", "()TE;"),
            member(PUBLIC, "remove", "()V"),
        ],
        ..INTERFACE
    },
    HostClass {
        name: "java.util.Collection",
        package: "java.util",
        signature: "<E:Ljava/lang/Object;>Ljava/lang/Object;Ljava/lang/Iterable<TE;>;",
        methods: &[
            member(ABSTRACT, "size", "()I"),
            member(ABSTRACT, "isEmpty", "()Z"),
            member(ABSTRACT, "contains", "(Ljava/lang/Object;)Z"),
            member(ABSTRACT, "iterator", "()Ljava/util/Iterator<TE;>;"),
            member(ABSTRACT, "toArray", "()[Ljava/lang/Object;"),
            member(ABSTRACT, "add", "(TE;)Z"),
            member(ABSTRACT, "remove", "(Ljava/lang/Object;)Z"),
            member(ABSTRACT, "containsAll", "(Ljava/util/Collection<*>;)Z"),
            member(ABSTRACT, "addAll", "(Ljava/util/Collection<+TE;>;)Z"),
            member(ABSTRACT, "clear", "()V"),
            member(PUBLIC, "removeIf", "(Ljava/util/function/Predicate<-TE;>;)Z"),
            member(ABSTRACT, "equals", "(Ljava/lang/Object;)Z"),
            member(ABSTRACT, "hashCode", "()I"),
        ],
        ..INTERFACE
    },
    HostClass {
        name: "java.util.List",
        package: "java.util",
        signature: "<E:Ljava/lang/Object;>Ljava/lang/Object;Ljava/util/Collection<TE;>;",
        methods: &[
            member(ABSTRACT, "size", "()I"),
            member(ABSTRACT, "get", "(I)TE;"),
            member(ABSTRACT, "set", "(ITE;)TE;"),
            member(ABSTRACT, "add", "(TE;)Z"),
            member(ABSTRACT, "add", "(ITE;)V"),
            member(ABSTRACT, "remove", "(I)TE;"),
            member(ABSTRACT, "indexOf", "(Ljava/lang/Object;)I"),
            member(ABSTRACT, "iterator", "()Ljava/util/Iterator<TE;>;"),
            member(ABSTRACT, "subList", "(II)Ljava/util/List<TE;>;"),
            member(PUBLIC, "sort", "(Ljava/util/Comparator<-TE;>;)V"),
            member(STATIC_VARARGS, "of", "<E:Ljava/lang/Object;>([TE;)Ljava/util/List<TE;>;"),
        ],
        ..INTERFACE
    },
    HostClass {
        name: "java.util.Set",
        package: "java.util",
        signature: "<E:Ljava/lang/Object;>Ljava/lang/Object;Ljava/util/Collection<TE;>;",
        methods: &[
            member(ABSTRACT, "size", "()I"),
            member(ABSTRACT, "add", "(TE;)Z"),
            member(ABSTRACT, "contains", "(Ljava/lang/Object;)Z"),
        ],
        ..INTERFACE
    },
    HostClass {
        name: "java.util.RandomAccess",
        package: "java.util",
        signature: "Ljava/lang/Object;",
        ..INTERFACE
    },
    HostClass {
        name: "java.util.Queue",
        package: "java.util",
        signature: "<E:Ljava/lang/Object;>Ljava/lang/Object;Ljava/util/Collection<TE;>;",
        methods: &[
            member(ABSTRACT, "offer", "(TE;)Z"),
            member(ABSTRACT, "poll", "()TE;"),
            member(ABSTRACT, "peek", "()TE;"),
        ],
        ..INTERFACE
    },
    HostClass {
        name: "java.util.Deque",
        package: "java.util",
        signature: "<E:Ljava/lang/Object;>Ljava/lang/Object;Ljava/util/Queue<TE;>;",
        methods: &[
            member(ABSTRACT, "addFirst", "(TE;)V"),
            member(ABSTRACT, "pollFirst", "()TE;"),
            member(ABSTRACT, "push", "(TE;)V"),
            member(ABSTRACT, "pop", "()TE;"),
        ],
        ..INTERFACE
    },
    HostClass {
        name: "java.util.AbstractCollection",
        package: "java.util",
        signature: "<E:Ljava/lang/Object;>Ljava/lang/Object;Ljava/util/Collection<TE;>;",
        methods: &[
            member(PROTECTED, "<init>", "()V"),
            member(ABSTRACT, "iterator", "()Ljava/util/Iterator<TE;>;"),
            member(ABSTRACT, "size", "()I"),
            member(PUBLIC, "isEmpty", "()Z"),
            member(PUBLIC, "contains", "(Ljava/lang/Object;)Z"),
            member(PUBLIC, "add", "(TE;)Z"),
            member(PUBLIC, "toString", "()Ljava/lang/String;"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.util.AbstractList",
        package: "java.util",
        signature: "<E:Ljava/lang/Object;>Ljava/util/AbstractCollection<TE;>;Ljava/util/List<TE;>;",
        fields: &[member(PROTECTED, "modCount", "I")],
        methods: &[
            member(PROTECTED, "<init>", "()V"),
            member(ABSTRACT, "get", "(I)TE;"),
            member(PUBLIC, "add", "(TE;)Z"),
            member(PUBLIC, "indexOf", "(Ljava/lang/Object;)I"),
            member(PUBLIC, "iterator", "()Ljava/util/Iterator<TE;>;"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.util.ArrayList",
        package: "java.util",
        signature: "<E:Ljava/lang/Object;>Ljava/util/AbstractList<TE;>;Ljava/util/List<TE;>;Ljava/util/RandomAccess;Ljava/lang/Cloneable;Ljava/io/Serializable;",
        methods: &[
            member(PUBLIC, "<init>", "()V"),
            member(PUBLIC, "<init>", "(I)V"),
            member(PUBLIC, "<init>", "(Ljava/util/Collection<+TE;>;)V"),
            member(PUBLIC, "get", "(I)TE;"),
            member(PUBLIC, "set", "(ITE;)TE;"),
            member(PUBLIC, "add", "(TE;)Z"),
            member(PUBLIC, "add", "(ITE;)V"),
            member(PUBLIC, "remove", "(I)TE;"),
            member(PUBLIC, "remove", "(Ljava/lang/Object;)Z"),
            member(PUBLIC, "size", "()I"),
            member(PUBLIC, "ensureCapacity", "(I)V"),
            member(PUBLIC, "trimToSize", "()V"),
            member(PUBLIC, "clone", "()Ljava/lang/Object;"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.util.AbstractSequentialList",
        package: "java.util",
        signature: "<E:Ljava/lang/Object;>Ljava/util/AbstractList<TE;>;",
        methods: &[
            member(PROTECTED, "<init>", "()V"),
            member(PUBLIC, "get", "(I)TE;"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.util.LinkedList",
        package: "java.util",
        signature: "<E:Ljava/lang/Object;>Ljava/util/AbstractSequentialList<TE;>;Ljava/util/List<TE;>;Ljava/util/Deque<TE;>;Ljava/lang/Cloneable;Ljava/io/Serializable;",
        methods: &[
            member(PUBLIC, "<init>", "()V"),
            member(PUBLIC, "addFirst", "(TE;)V"),
            member(PUBLIC, "pollFirst", "()TE;"),
            member(PUBLIC, "size", "()I"),
        ],
        ..CLASS
    },
    HostClass {
        name: "java.util.Map",
        package: "java.util",
        signature: "<K:Ljava/lang/Object;V:Ljava/lang/Object;>Ljava/lang/Object;",
        methods: &[
            member(ABSTRACT, "size", "()I"),
            member(ABSTRACT, "get", "(Ljava/lang/Object;)TV;"),
            member(ABSTRACT, "put", "(TK;TV;)TV;"),
            member(ABSTRACT, "containsKey", "(Ljava/lang/Object;)Z"),
            member(ABSTRACT, "keySet", "()Ljava/util/Set<TK;>;"),
            member(ABSTRACT, "values", "()Ljava/util/Collection<TV;>;"),
            member(ABSTRACT, "entrySet", "()Ljava/util/Set<Ljava/util/Map$Entry<TK;TV;>;>;"),
            member(PUBLIC, "getOrDefault", "(Ljava/lang/Object;TV;)TV;"),
        ],
        nested: &["java.util.Map.Entry"],
        ..INTERFACE
    },
    HostClass {
        name: "java.util.Map.Entry",
        package: "java.util",
        signature: "<K:Ljava/lang/Object;V:Ljava/lang/Object;>Ljava/lang/Object;",
        methods: &[
            member(ABSTRACT, "getKey", "()TK;"),
            member(ABSTRACT, "getValue", "()TV;"),
            member(ABSTRACT, "setValue", "(TV;)TV;"),
        ],
        enclosing: Some("java.util.Map"),
        ..INTERFACE
    },
    HostClass {
        name: "java.util.Comparator",
        package: "java.util",
        signature: "<T:Ljava/lang/Object;>Ljava/lang/Object;",
        annotations: FUNCTIONAL,
        methods: &[
            member(ABSTRACT, "compare", "(TT;TT;)I"),
            member(ABSTRACT, "equals", "(Ljava/lang/Object;)Z"),
            member(PUBLIC, "reversed", "()Ljava/util/Comparator<TT;>;"),
            member(
                STATIC,
                "naturalOrder",
                "<T::Ljava/lang/Comparable<-TT;>;>()Ljava/util/Comparator<TT;>;",
            ),
        ],
        ..INTERFACE
    },
    // java.util.function
    HostClass {
        name: "java.util.function.Function",
        package: "java.util.function",
        signature: "<T:Ljava/lang/Object;R:Ljava/lang/Object;>Ljava/lang/Object;",
        annotations: FUNCTIONAL,
        methods: &[
            member(ABSTRACT, "apply", "(TT;)TR;"),
            member(
                PUBLIC,
                "andThen",
                "<V:Ljava/lang/Object;>(Ljava/util/function/Function<-TR;+TV;>;)Ljava/util/function/Function<TT;TV;>;",
            ),
            member(
                STATIC,
                "identity",
                "<T:Ljava/lang/Object;>()Ljava/util/function/Function<TT;TT;>;",
            ),
        ],
        ..INTERFACE
    },
    HostClass {
        name: "java.util.function.Supplier",
        package: "java.util.function",
        signature: "<T:Ljava/lang/Object;>Ljava/lang/Object;",
        annotations: FUNCTIONAL,
        methods: &[member(ABSTRACT, "get", "()TT;")],
        ..INTERFACE
    },
    HostClass {
        name: "java.util.function.Consumer",
        package: "java.util.function",
        signature: "<T:Ljava/lang/Object;>Ljava/lang/Object;",
        annotations: FUNCTIONAL,
        methods: &[
            member(ABSTRACT, "accept", "(TT;)V"),
            member(
                PUBLIC,
                "andThen",
                "(Ljava/util/function/Consumer<-TT;>;)Ljava/util/function/Consumer<TT;>;",
            ),
        ],
        ..INTERFACE
    },
    HostClass {
        name: "java.util.function.Predicate",
        package: "java.util.function",
        signature: "<T:Ljava/lang/Object;>Ljava/lang/Object;",
        annotations: FUNCTIONAL,
        methods: &[
            member(ABSTRACT, "test", "(TT;)Z"),
            member(PUBLIC, "negate", "()Ljava/util/function/Predicate<TT;>;"),
        ],
        ..INTERFACE
    },
];
