//! Shared sample pages for the integration tests
//!
//! Shaped like the generator's client and paginator pages: class directives at
//! the top level or nested one indentation step, method directives nested under
//! the class, then request and response sections per method.

#![allow(dead_code)]

pub const CLIENT_PAGE: &str = r#"======
Bucket
======

.. py:class:: Storage.Client

  A low-level client representing the storage service.

  .. py:method:: create_bucket(**kwargs)

    Creates a new bucket.

    **Request Syntax**
    ::

      response = client.create_bucket(
          ACL='private'|'public-read',
          Bucket='string'
      )
    :type ACL: string
    :param ACL: The canned ACL to apply to the bucket.

    :type Bucket: string
    :param Bucket: **[REQUIRED]**

      The name of the bucket to create.

    :rtype: dict
    :returns:

      **Response Syntax**

      ::

        {
            'Location': 'string',
            'RequestId': 'string'
        }

      **Response Structure**

      - *(dict) --*

        - **Location** *(string) --*

          A forward slash followed by the name of the bucket.

        - **RequestId** *(string) --*

          Identifier of the request.

  .. py:method:: delete_bucket(**kwargs)

    Deletes the bucket.

    **Request Syntax**
    ::

      response = client.delete_bucket(
          Bucket='string'
      )
    :type Bucket: string
    :param Bucket: **[REQUIRED]**

      The bucket to delete.

    :returns: None
"#;

pub const PAGINATOR_PAGE: &str = r#".. py:class:: Storage.Paginator.ListBuckets

  .. py:method:: paginate(**kwargs)

    Creates an iterator that will paginate through responses.

  .. py:class:: Storage.Paginator.ListObjects

  .. py:method:: paginate(**kwargs)

    Paginates through objects.
"#;
